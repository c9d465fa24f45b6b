//! Index page: the listing grid with its price filter.
//!
//! Listings come from the API when one is configured and reachable; an
//! outage substitutes the local catalog. The price filter is pure display
//! state: it hides cards client-side and never refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stayhub_shared::format::{self, PriceFilter};
use stayhub_shared::Place;
use web_sys::MouseEvent;

use crate::api::PlacesApi;
use crate::auth::use_auth;
use crate::catalog::use_catalog;
use crate::components::status::use_status;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let status = use_status();
    let catalog = use_catalog();
    let config = crate::use_config();

    let (places, set_places) = signal(Vec::<Place>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(PriceFilter::All);

    let load_places = move || {
        let credential = auth.state.get_untracked().credential;
        let api = config.api.clone().map(PlacesApi::new);
        set_loading.set(true);
        spawn_local(async move {
            match api {
                Some(api) => match api.list_places(credential.as_ref()).await {
                    Ok(data) => set_places.set(data),
                    Err(err) if err.is_fallback_eligible() => {
                        log::warn!("places fetch failed ({err}), serving local catalog");
                        set_places.set(catalog.with(|c| c.places().to_vec()));
                    }
                    Err(err) => {
                        log::error!("places fetch failed: {err}");
                        status.error(err.message);
                        set_places.set(Vec::new());
                    }
                },
                None => set_places.set(catalog.with(|c| c.places().to_vec())),
            }
            set_loading.set(false);
        });
    };

    // Initial load; re-runs when the session changes so the request picks
    // up (or drops) the bearer token.
    Effect::new(move |_| {
        auth.state.track();
        load_places();
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                <h1 class="text-3xl font-bold">"Available Places"</h1>
                <div class="form-control">
                    <label class="label" for="price-filter">
                        <span class="label-text">"Max price"</span>
                    </label>
                    <select
                        id="price-filter"
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            set_filter.set(PriceFilter::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value="10">"$10"</option>
                        <option value="50">"$50"</option>
                        <option value="100">"$100"</option>
                        <option value="all" selected=true>"All"</option>
                    </select>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            </Show>

            <div
                id="places-list"
                class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"
            >
                <For
                    each=move || places.get()
                    key=|place| place.id.clone()
                    children=move |place| view! { <PlaceCard place filter /> }
                />
            </div>

            <Show when=move || !loading.get() && places.with(|p| p.is_empty())>
                <p class="text-center text-base-content/60 py-8">
                    "No places available at the moment."
                </p>
            </Show>
        </div>
    }
}

/// One listing card.
///
/// Filtered-out cards stay mounted and hide via CSS, so flipping the filter
/// never rebuilds the grid or refetches anything.
#[component]
fn PlaceCard(place: Place, filter: ReadSignal<PriceFilter>) -> impl IntoView {
    let navigate = use_navigate();
    let price = place.price_per_night;
    let detail_route = AppRoute::Place {
        id: Some(place.id.clone()),
    };
    let href = detail_route.to_path();
    let open_details = move |ev: MouseEvent| {
        ev.prevent_default();
        navigate(detail_route.clone());
    };
    let icon = place
        .icon
        .unwrap_or_else(|| format::FALLBACK_ICON.to_string());

    view! {
        <div
            class="place-card card bg-base-100 shadow-xl"
            class:hidden=move || !filter.get().admits(price)
        >
            <figure class="place-image bg-base-200 py-8 text-6xl">{icon}</figure>
            <div class="card-body">
                <h3 class="card-title">{place.title}</h3>
                <div class="place-price text-primary font-semibold">
                    {format::price_label(price)}
                </div>
                <div class="card-actions justify-end">
                    <a
                        href=href
                        class="details-button btn btn-primary btn-sm"
                        on:click=open_details
                    >
                        "View Details"
                    </a>
                </div>
            </div>
        </div>
    }
}
