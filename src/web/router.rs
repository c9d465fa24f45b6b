//! Router service.
//!
//! Wraps the History API behind a context-provided service so every
//! `window.history` touch lives in this module. Navigation runs a
//! request -> guard -> load flow; the popstate listener is held through an
//! [`EventListener`] guard stored in the reactive arena, so it detaches
//! when the app is disposed instead of leaking.

use leptos::prelude::*;

use super::EventListener;
use super::route::AppRoute;

/// Current browser location as (path, raw query string).
fn current_location() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return ("/".to_string(), String::new());
    };
    let location = window.location();
    (
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default(),
    )
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Drives the page through a route signal. The auth check is an injected
/// signal, so the router never reaches into the auth module itself.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (path, query) = current_location();
        let (current_route, set_route) = signal(AppRoute::from_location(&path, &query));
        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigates to a route: guard first, then history push, then load.
    pub fn navigate(&self, target: AppRoute) {
        let target = self.guard(target);
        push_history_state(&target.to_path());
        self.set_route.set(target);
    }

    /// The only guard this app needs: authenticated visitors are bounced
    /// off the login page.
    fn guard(&self, target: AppRoute) -> AppRoute {
        if target.should_redirect_when_authenticated() && self.is_authenticated.get_untracked() {
            let redirect = AppRoute::auth_success_redirect();
            log::info!("router: already authenticated, {target} -> {redirect}");
            redirect
        } else {
            target
        }
    }

    /// Browser back/forward. The guard applies here too; a redirect uses
    /// `replaceState` so the history entry being popped is not duplicated.
    fn popstate_listener(&self) -> Option<EventListener> {
        let window = web_sys::window()?;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Some(EventListener::new(&window, "popstate", move || {
            let (path, query) = current_location();
            let mut target = AppRoute::from_location(&path, &query);
            if target.should_redirect_when_authenticated() && is_authenticated.get_untracked() {
                target = AppRoute::auth_success_redirect();
                replace_history_state(&target.to_path());
            }
            set_route.set(target);
        }))
    }

    /// Covers a direct load of `/login` with a live session. Runs once,
    /// after the stored session has been restored; later auth changes go
    /// through [`Self::navigate`] (the login page schedules its own
    /// redirect after a successful sign-in).
    fn redirect_on_startup(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        // Nothing in here is tracked, so the effect fires exactly once.
        Effect::new(move |_| {
            if is_authenticated.get_untracked()
                && current_route
                    .get_untracked()
                    .should_redirect_when_authenticated()
            {
                let redirect = AppRoute::auth_success_redirect();
                log::info!("router: session already active, redirecting to {redirect}");
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    if let Some(listener) = router.popstate_listener() {
        // Keep the guard in the arena; app disposal detaches the listener.
        let _guard = StoredValue::new_local(listener);
    }
    router.redirect_on_startup();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation closure for components.
pub fn use_navigate() -> impl Fn(AppRoute) + Clone {
    let router = use_router();
    move |to: AppRoute| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component. Provides the routing context; mount once at the
/// top of the app.
#[component]
pub fn Router(
    /// Auth state signal injected into the guard.
    is_authenticated: Signal<bool>,
    /// Subtree with routing available.
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Router outlet. Renders whatever the matcher returns for the current
/// route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
