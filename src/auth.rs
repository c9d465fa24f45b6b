//! Authentication state.
//!
//! Keeps the session-derived auth state in a context signal, decoupled from
//! routing: the router checks an injected boolean signal, pages read the
//! credential. The persisted side lives in [`crate::session`]; this module
//! keeps the two in sync and mirrors the state onto the `<body>` marker
//! class for CSS hooks.

use leptos::prelude::*;
use stayhub_shared::config::AppConfig;
use stayhub_shared::error::{ApiError, ApiResult};
use stayhub_shared::{AUTH_BODY_CLASS, GUEST_NAME, Credential};

use crate::api::PlacesApi;
use crate::session::{CredentialStore, WebSessionStorage};

/// Auth state as the UI sees it.
#[derive(Clone, Default)]
pub struct AuthState {
    /// Present while a session is active.
    pub credential: Option<Credential>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Short display identity for the navbar and review authorship.
    pub fn display_name(&self) -> String {
        self.credential
            .as_ref()
            .map(Credential::display_name)
            .unwrap_or_else(|| GUEST_NAME.to_string())
    }
}

/// Auth context: state signals shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Derived boolean for the router guard and conditional UI.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

fn store(config: &AppConfig) -> CredentialStore<WebSessionStorage> {
    CredentialStore::new(WebSessionStorage::new(config.token_store))
}

/// Restores a persisted session at startup and installs the body-class
/// mirror.
pub fn init_auth(ctx: &AuthContext, config: &AppConfig) {
    let store = store(config);
    if store.is_authenticated() {
        log::info!("auth: restored persisted session");
    }
    ctx.set_state.update(|state| state.credential = store.read());

    let state = ctx.state;
    Effect::new(move |_| {
        set_body_auth_class(state.get().is_authenticated());
    });
}

/// Mirrors authentication onto `<body class="authenticated">` so the
/// stylesheet can react without script hooks.
fn set_body_auth_class(authenticated: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let _ = if authenticated {
        class_list.add_1(AUTH_BODY_CLASS)
    } else {
        class_list.remove_1(AUTH_BODY_CLASS)
    };
}

/// Exchanges credentials for a session: API call, persist, publish.
pub async fn login(
    ctx: &AuthContext,
    config: &AppConfig,
    email: String,
    password: String,
) -> ApiResult<()> {
    let Some(api_config) = config.api.clone() else {
        return Err(ApiError::generic("no API endpoint is configured"));
    };

    let credential = PlacesApi::new(api_config).login(&email, &password).await?;
    store(config).write(&credential);
    log::info!("auth: login succeeded for {}", credential.display_name());
    ctx.set_state
        .update(|state| state.credential = Some(credential));
    Ok(())
}

/// Clears the session from every substrate and from memory. Navigation back
/// to the entry page is the caller's move.
pub fn logout(ctx: &AuthContext, config: &AppConfig) {
    store(config).clear();
    ctx.set_state.update(|state| state.credential = None);
    log::info!("auth: session cleared");
}
