//! Place details page: summary, property meta, amenities, and reviews.
//!
//! Reviews are resolved in order of preference: the dedicated endpoint,
//! then whatever list the detail payload inlined, then the local catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stayhub_shared::format;
use stayhub_shared::protocol::PlaceDetails;
use stayhub_shared::{DEFAULT_PLACE_ID, Place, Review};
use web_sys::MouseEvent;

use crate::api::PlacesApi;
use crate::auth::use_auth;
use crate::catalog::{CatalogStore, use_catalog};
use crate::components::icons::Pencil;
use crate::components::review_form::ReviewForm;
use crate::web;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

const DETAILS_UNAVAILABLE: &str = "Unable to load place details. Please try again later.";

/// Load progress for the details panel.
#[derive(Clone)]
enum DetailState {
    Loading,
    Ready(Place),
    Failed,
}

/// Page-local keys for review rows.
///
/// Nothing stops the same visitor from storing the same text twice, so row
/// identity cannot come from the review content itself.
#[derive(Debug, Default)]
struct ReviewKeys {
    next: usize,
}

impl ReviewKeys {
    fn tag_all(&mut self, reviews: Vec<Review>) -> Vec<(usize, Review)> {
        reviews.into_iter().map(|review| self.tag(review)).collect()
    }

    /// Keys are never reused within a page visit, so a prepend leaves the
    /// existing rows untouched.
    fn tag(&mut self, review: Review) -> (usize, Review) {
        let key = self.next;
        self.next += 1;
        (key, review)
    }
}

/// Write half of the review list: every row is tagged before it lands in
/// the signal.
#[derive(Clone, Copy)]
struct ReviewWriter {
    keys: StoredValue<ReviewKeys>,
    rows: WriteSignal<Vec<(usize, Review)>>,
}

impl ReviewWriter {
    fn new(rows: WriteSignal<Vec<(usize, Review)>>) -> Self {
        Self {
            keys: StoredValue::new(ReviewKeys::default()),
            rows,
        }
    }

    fn replace(&self, reviews: Vec<Review>) {
        if let Some(tagged) = self.keys.try_update_value(|keys| keys.tag_all(reviews)) {
            self.rows.set(tagged);
        }
    }

    fn prepend(&self, review: Review) {
        if let Some(row) = self.keys.try_update_value(|keys| keys.tag(review)) {
            self.rows.update(|rows| rows.insert(0, row));
        }
    }
}

/// An open form request only counts while the session is live.
fn inline_form_open(requested: bool, authenticated: bool) -> bool {
    requested && authenticated
}

fn load_from_catalog(
    catalog: CatalogStore,
    place_id: &str,
    set_details: WriteSignal<DetailState>,
    reviews: ReviewWriter,
) {
    match catalog.with(|c| c.place(place_id).cloned()) {
        Some(place) => {
            reviews.replace(catalog.with(|c| c.reviews(place_id).to_vec()));
            set_details.set(DetailState::Ready(place));
        }
        None => set_details.set(DetailState::Failed),
    }
}

#[component]
pub fn PlacePage(id: Option<String>) -> impl IntoView {
    let auth = use_auth();
    let catalog = use_catalog();
    let config = crate::use_config();
    let navigate = use_navigate();

    let place_id = id.unwrap_or_else(|| DEFAULT_PLACE_ID.to_string());

    let (details, set_details) = signal(DetailState::Loading);
    let (reviews, set_reviews) = signal(Vec::<(usize, Review)>::new());
    let review_writer = ReviewWriter::new(set_reviews);
    let (show_form, set_show_form) = signal(false);

    // Reload on session changes so the requests carry (or drop) the bearer.
    Effect::new({
        let place_id = place_id.clone();
        let config = config.clone();
        move |_| {
            auth.state.track();
            let credential = auth.state.get_untracked().credential;
            let api = config.api.clone().map(PlacesApi::new);
            let place_id = place_id.clone();
            set_details.set(DetailState::Loading);
            spawn_local(async move {
                let Some(api) = api else {
                    load_from_catalog(catalog, &place_id, set_details, review_writer);
                    return;
                };
                match api.place_details(credential.as_ref(), &place_id).await {
                    Ok(PlaceDetails {
                        place,
                        embedded_reviews,
                    }) => {
                        set_details.set(DetailState::Ready(place));
                        match api.list_reviews(credential.as_ref(), &place_id).await {
                            Ok(data) => review_writer.replace(data),
                            Err(err) => {
                                log::warn!(
                                    "reviews fetch failed ({err}), using the embedded list or the local catalog"
                                );
                                match embedded_reviews {
                                    Some(embedded) => review_writer.replace(embedded),
                                    None => review_writer
                                        .replace(catalog.with(|c| c.reviews(&place_id).to_vec())),
                                }
                            }
                        }
                    }
                    Err(err) if err.is_fallback_eligible() => {
                        log::warn!("place details fetch failed ({err}), serving local catalog");
                        load_from_catalog(catalog, &place_id, set_details, review_writer);
                    }
                    Err(err) => {
                        log::error!("place details fetch failed: {err}");
                        set_details.set(DetailState::Failed);
                    }
                }
            });
        }
    });

    let toggle_form = move |ev: MouseEvent| {
        ev.prevent_default();
        if !auth.state.get_untracked().is_authenticated() {
            web::alert("Please login to add a review.");
            navigate(AppRoute::Login);
            return;
        }
        set_show_form.update(|visible| *visible = !*visible);
    };

    let on_submitted = move |review: Review| {
        review_writer.prepend(review);
        set_show_form.set(false);
    };

    let form_place = place_id.clone();
    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-8">
            {move || match details.get() {
                DetailState::Loading => view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
                    .into_any(),
                DetailState::Failed => view! {
                    <div role="alert" class="alert alert-error">
                        <span>{DETAILS_UNAVAILABLE}</span>
                    </div>
                }
                    .into_any(),
                DetailState::Ready(place) => view! { <PlaceSummary place /> }.into_any(),
            }}

            <section id="reviews" class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">"Reviews"</h2>
                    <button
                        class="add-review-btn btn btn-primary btn-sm gap-2"
                        on:click=toggle_form
                    >
                        <Pencil attr:class="h-4 w-4" />
                        "Add Review"
                    </button>
                </div>

                <Show when=move || {
                    inline_form_open(show_form.get(), auth.state.get().is_authenticated())
                }>
                    <div id="addReviewInline" class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <ReviewForm fixed_place=form_place.clone() on_submitted=on_submitted />
                        </div>
                    </div>
                </Show>

                <Show
                    when=move || !reviews.with(|r| r.is_empty())
                    fallback=|| view! { <p class="text-base-content/60">{format::NO_REVIEWS}</p> }
                >
                    <div class="space-y-4">
                        <For
                            each=move || reviews.get()
                            key=|(key, _)| *key
                            children=move |(_, review)| view! { <ReviewCard review /> }
                        />
                    </div>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn PlaceSummary(place: Place) -> impl IntoView {
    let icon = place
        .icon
        .clone()
        .unwrap_or_else(|| format::FALLBACK_ICON.to_string());
    let host = place
        .host
        .clone()
        .unwrap_or_else(|| format::UNKNOWN_HOST.to_string());
    let description = format::description_text(&place.description).to_string();
    let amenities = if place.amenities.is_empty() {
        view! { <p class="text-base-content/60">{format::NO_AMENITIES}</p> }.into_any()
    } else {
        view! {
            <div class="amenities-list flex flex-wrap gap-2">
                {place
                    .amenities
                    .iter()
                    .map(|amenity| view! { <span class="badge badge-outline">{amenity.clone()}</span> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="place-details" class="card bg-base-100 shadow-xl overflow-hidden">
            <figure class="place-image bg-base-200 py-10 text-7xl">{icon}</figure>
            <div class="card-body space-y-4">
                <div class="place-header flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                    <h1 class="place-title text-3xl font-bold">{place.title}</h1>
                    <div class="place-price text-primary text-xl font-semibold">
                        {format::price_label(place.price_per_night)}
                    </div>
                </div>
                <p class="host text-sm">
                    <span class="font-semibold">"Host: "</span>
                    {host}
                </p>

                <div class="place-description">
                    <h3 class="text-lg font-semibold">"About this place"</h3>
                    <p>{description}</p>
                </div>

                <div class="place-meta space-y-2">
                    <h3 class="text-lg font-semibold">"Property Details"</h3>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-x-8 gap-y-2 text-sm">
                        <MetaItem label="Guests" value=format::count_label(place.max_guests, "guest") />
                        <MetaItem
                            label="Bedrooms"
                            value=format::count_label(place.bedrooms, "bedroom")
                        />
                        <MetaItem
                            label="Bathrooms"
                            value=format::count_label(place.bathrooms, "bathroom")
                        />
                        <MetaItem label="Check-in" value=format::CHECK_IN />
                        <MetaItem label="Check-out" value=format::CHECK_OUT />
                    </div>
                </div>

                <div class="amenities-section space-y-2">
                    <h3 class="text-lg font-semibold">"Amenities"</h3>
                    {amenities}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetaItem(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="meta-item flex justify-between border-b border-base-200 py-1">
            <span class="font-medium">{label}</span>
            <span>{value}</span>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let rating_title = format!("{}/5", review.rating);
    view! {
        <div class="review-card card bg-base-100 shadow">
            <div class="card-body py-4">
                <div class="review-header flex items-center justify-between">
                    <span class="review-user font-semibold">{review.author}</span>
                    <span class="review-rating" title=rating_title>
                        {format::stars(review.rating)}
                    </span>
                </div>
                <p class="review-comment">{review.comment}</p>
                <div class="review-date text-xs text-base-content/60">{review.date}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn review(author: &str, comment: &str) -> Review {
        Review {
            author: author.to_string(),
            rating: 5,
            comment: comment.to_string(),
            date: "January 15, 2025".to_string(),
        }
    }

    #[test]
    fn identical_reviews_get_distinct_row_keys() {
        let mut keys = ReviewKeys::default();
        let rows =
            keys.tag_all(vec![review("alice", "Great stay"), review("alice", "Great stay")]);

        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].0, rows[1].0);
        assert_eq!(rows[0].1, rows[1].1);
    }

    #[test]
    fn new_rows_never_reuse_keys_from_earlier_loads() {
        let mut keys = ReviewKeys::default();
        let mut seen: Vec<usize> = keys
            .tag_all(vec![review("alice", "ok"), review("bob", "fine")])
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        seen.extend(
            keys.tag_all(vec![review("alice", "ok")])
                .into_iter()
                .map(|(key, _)| key),
        );
        seen.push(keys.tag(review("alice", "ok")).0);

        let unique: HashSet<usize> = seen.iter().copied().collect();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn ending_the_session_closes_the_inline_form() {
        assert!(inline_form_open(true, true));
        assert!(!inline_form_open(true, false));
        assert!(!inline_form_open(false, true));
        assert!(!inline_form_open(false, false));
    }
}
