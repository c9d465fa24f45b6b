//! StayHub front end.
//!
//! Context-driven single page app:
//! - `web::route` / `web::router`: route model and routing service
//! - `auth`: session state management
//! - `catalog`: local listing catalog, the offline stand-in for the API
//! - `components`: the pages and shared UI

mod api;
mod auth;
mod catalog;
mod components {
    pub mod add_review;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod navbar;
    pub mod place;
    mod review_form;
    pub mod status;
}
mod session;

use leptos::prelude::*;
use stayhub_shared::catalog::Catalog;
use stayhub_shared::config::AppConfig;

use crate::auth::{AuthContext, init_auth};
use crate::catalog::CatalogStore;
use crate::components::add_review::AddReviewPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::place::PlacePage;
use crate::components::status::{StatusBanner, StatusContext};

// Browser API wrappers. Every direct `web_sys` touch outside rendering
// (cookies, history, storage, DOM listeners) lives in this module.
pub(crate) mod web {
    pub mod cookie;
    mod events;
    pub mod route;
    pub mod router;
    mod storage;

    pub use events::EventListener;
    pub use storage::LocalStorage;

    /// Blocking browser alert, for messages the visitor must acknowledge.
    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

pub(crate) fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context. Ensure App provides it.")
}

/// Maps the current route to its page view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Place { id } => view! { <PlacePage id /> }.into_any(),
        AppRoute::AddReview { id } => view! { <AddReviewPage id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Configuration: which API to talk to and where tokens live.
    let config = AppConfig::default();
    provide_context(config.clone());

    // 2. Session context, restored from the configured token store.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &config);

    // 3. App-wide services: status banner and the local catalog.
    provide_context(StatusContext::new());
    provide_context(CatalogStore::new(Catalog::seeded()));

    // 4. Routing, with the auth signal injected for the login-page guard.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen flex flex-col bg-base-200">
                <Navbar />
                <StatusBanner />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <footer class="footer footer-center p-4 text-sm text-base-content/60">
                    <p>"StayHub. All rights reserved."</p>
                </footer>
            </div>
        </Router>
    }
}
