//! Standalone add-review page.
//!
//! Requires a session: signed-in visitors get the full form with a place
//! selector, everyone else a login prompt.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use stayhub_shared::Review;
use web_sys::MouseEvent;

use crate::auth::use_auth;
use crate::components::review_form::ReviewForm;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn AddReviewPage(id: Option<String>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let login_nav = navigate.clone();
    let login_prompt = move || {
        let navigate = login_nav.clone();
        let go_login = move |ev: MouseEvent| {
            ev.prevent_default();
            navigate(AppRoute::Login);
        };
        view! {
            <div id="authRequired" role="alert" class="alert alert-warning">
                <span>"You must be logged in to add a review."</span>
                <a href="/login" class="btn btn-sm btn-primary" on:click=go_login>
                    "Login"
                </a>
            </div>
        }
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"Add a Review"</h1>

            <Show when=move || auth.state.get().is_authenticated() fallback=login_prompt>
                {
                    let navigate = navigate.clone();
                    let preselect = id.clone();
                    let on_submitted = move |_: Review| {
                        let navigate = navigate.clone();
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigate(AppRoute::auth_success_redirect())
                        })
                        .forget();
                    };
                    view! {
                        <div id="reviewContent" class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <ReviewForm preselect=preselect on_submitted=on_submitted />
                            </div>
                        </div>
                    }
                }
            </Show>
        </div>
    }
}
