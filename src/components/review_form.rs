//! Review form, shared by the detail page (inline, place fixed) and the
//! standalone add-review page (with a place selector).

use leptos::prelude::*;
use leptos::task::spawn_local;
use stayhub_shared::config::AppConfig;
use stayhub_shared::error::{ApiError, ApiResult};
use stayhub_shared::format;
use stayhub_shared::{Credential, Review};
use web_sys::SubmitEvent;

use crate::api::PlacesApi;
use crate::auth::use_auth;
use crate::catalog::{CatalogStore, use_catalog};
use crate::components::status::use_status;
use crate::web;

/// Local preconditions, checked before anything leaves the page.
///
/// Returns the parsed rating and the trimmed comment. The message is what
/// the visitor gets to see, so it stays in form wording.
fn validate_submission(place_id: &str, rating: &str, comment: &str) -> ApiResult<(u8, String)> {
    let comment = comment.trim();
    if place_id.is_empty() || rating.is_empty() || comment.is_empty() {
        return Err(ApiError::validation("Please fill in all fields."));
    }
    let parsed = rating
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| ApiError::validation("Please fill in all fields."))?;
    Ok((parsed, comment.to_string()))
}

/// Stores a review: through the API when one is configured, in the local
/// catalog when there is none or the API is down.
async fn submit_review(
    config: AppConfig,
    catalog: CatalogStore,
    credential: Credential,
    place_id: String,
    rating: u8,
    comment: String,
) -> ApiResult<Review> {
    let author = credential.display_name();
    let Some(api_config) = config.api else {
        return catalog
            .add_review(&place_id, rating, &comment, &author)
            .ok_or_else(|| ApiError::generic("local catalog is unavailable"));
    };

    let api = PlacesApi::new(api_config);
    match api
        .post_review(Some(&credential), &place_id, rating, &comment)
        .await
    {
        Ok(review) => Ok(review),
        Err(err) if err.is_fallback_eligible() => {
            log::warn!("review submit failed ({err}), storing in the local catalog");
            catalog
                .add_review(&place_id, rating, &comment, &author)
                .ok_or(err)
        }
        Err(err) => Err(err),
    }
}

#[component]
pub fn ReviewForm(
    /// Locks the form to one place; used inline on the detail page.
    #[prop(optional, into)]
    fixed_place: Option<String>,
    /// Preselects a place while keeping the selector visible.
    #[prop(optional_no_strip, into)]
    preselect: Option<String>,
    /// Receives the stored review after a successful submit.
    #[prop(into)]
    on_submitted: Callback<Review>,
) -> impl IntoView {
    let auth = use_auth();
    let status = use_status();
    let catalog = use_catalog();
    let config = crate::use_config();

    let inline = fixed_place.is_some();
    let selected_place = RwSignal::new(fixed_place.clone().or(preselect).unwrap_or_default());
    let rating = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let form_id = if inline { "inlineReviewForm" } else { "addReviewForm" };
    let rating_id = if inline { "inlineRating" } else { "reviewRating" };
    let comment_id = if inline { "inlineComment" } else { "reviewComment" };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(credential) = auth.state.get_untracked().credential else {
            web::alert("Please login to add a review.");
            return;
        };

        let place_id = selected_place.get();
        let (rating_value, comment_text) =
            match validate_submission(&place_id, &rating.get(), &comment.get()) {
                Ok(parsed) => parsed,
                Err(err) => {
                    web::alert(&err.message);
                    return;
                }
            };

        set_is_submitting.set(true);
        let config = config.clone();
        spawn_local(async move {
            match submit_review(config, catalog, credential, place_id, rating_value, comment_text)
                .await
            {
                Ok(review) => {
                    status.success("Review added successfully!");
                    rating.set(String::new());
                    comment.set(String::new());
                    on_submitted.run(review);
                }
                Err(err) => {
                    log::error!("review submit failed: {err}");
                    status.error(format!("Failed to submit review: {}", err.message));
                }
            }
            set_is_submitting.set(false);
        });
    };

    // Catalog listings never change at runtime, so the selector options are
    // built once.
    let place_options = (!inline).then(|| {
        let initial = selected_place.get_untracked();
        let options = catalog
            .with(|c| c.places().to_vec())
            .into_iter()
            .map(|place| {
                let icon = place
                    .icon
                    .unwrap_or_else(|| format::FALLBACK_ICON.to_string());
                let label = format!("{icon} {}", place.title);
                let is_initial = place.id == initial;
                view! {
                    <option value=place.id selected=is_initial>{label}</option>
                }
            })
            .collect_view();

        view! {
            <div class="form-control">
                <label class="label" for="reviewPlace">
                    <span class="label-text">"Place"</span>
                </label>
                <select
                    id="reviewPlace"
                    class="select select-bordered"
                    on:change=move |ev| selected_place.set(event_target_value(&ev))
                >
                    <option value="" selected=initial.is_empty()>"Choose a place"</option>
                    {options}
                </select>
            </div>
        }
    });

    view! {
        <form id=form_id class="space-y-4" on:submit=on_submit>
            {place_options}

            <div class="form-control">
                <label class="label" for=rating_id>
                    <span class="label-text">"Rating"</span>
                </label>
                <select
                    id=rating_id
                    class="select select-bordered"
                    on:change=move |ev| rating.set(event_target_value(&ev))
                    prop:value=move || rating.get()
                >
                    <option value="">"Choose a rating"</option>
                    <option value="5">"5"</option>
                    <option value="4">"4"</option>
                    <option value="3">"3"</option>
                    <option value="2">"2"</option>
                    <option value="1">"1"</option>
                </select>
            </div>

            <div class="form-control">
                <label class="label" for=comment_id>
                    <span class="label-text">"Comment"</span>
                </label>
                <textarea
                    id=comment_id
                    class="textarea textarea-bordered h-24"
                    placeholder="Share your experience..."
                    on:input=move |ev| comment.set(event_target_value(&ev))
                    prop:value=move || comment.get()
                ></textarea>
            </div>

            <button class="btn btn-primary">
                {move || if is_submitting.get() {
                    view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                } else {
                    "Submit Review".into_any()
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use stayhub_shared::catalog::Catalog;
    use stayhub_shared::error::ApiErrorKind;

    #[test]
    fn valid_submission_parses() {
        let (rating, comment) = validate_submission("2", "4", "  Great place  ")
            .expect("submission should be accepted");
        assert_eq!(rating, 4);
        assert_eq!(comment, "Great place");
    }

    #[test]
    fn missing_fields_are_rejected() {
        for (place, rating, comment) in [("", "4", "ok"), ("1", "", "ok"), ("1", "4", "   ")] {
            let err = validate_submission(place, rating, comment)
                .expect_err("incomplete submission should be rejected");
            assert_eq!(err.kind, ApiErrorKind::Validation);
            assert_eq!(err.message, "Please fill in all fields.");
        }
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        assert!(validate_submission("1", "0", "ok").is_err());
        assert!(validate_submission("1", "6", "ok").is_err());
        assert!(validate_submission("1", "abc", "ok").is_err());
    }

    #[test]
    fn validation_errors_never_fall_back_to_the_catalog() {
        let err = validate_submission("", "", "").expect_err("must fail");
        assert!(!err.is_fallback_eligible());
    }

    // Nothing in the submit path deduplicates repeat submissions.
    #[test]
    fn repeated_submissions_store_every_review() {
        let catalog = CatalogStore::new(Catalog::seeded());
        let before = catalog.with(|c| c.reviews("2").len());
        let credential = Credential::new("T".to_string(), Some("alice@example.com".to_string()));

        for _ in 0..2 {
            block_on(submit_review(
                AppConfig::offline(),
                catalog,
                credential.clone(),
                "2".to_string(),
                5,
                "Loved the fireplace".to_string(),
            ))
            .expect("offline submissions land in the catalog");
        }

        assert_eq!(catalog.with(|c| c.reviews("2").len()), before + 2);
    }
}
