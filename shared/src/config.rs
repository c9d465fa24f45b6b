//! Client configuration.
//!
//! One [`AppConfig`] value is provided at mount time and read everywhere
//! through context. `api: None` puts the client in catalog-only mode, where
//! every page serves local data and login is unavailable.

use serde::{Deserialize, Serialize};

/// Default backend origin for local development.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Which substrate holds the session token for this deployment.
///
/// Exactly one substrate is authoritative; logout wipes both so flipping
/// this setting between releases cannot strand a stale token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStore {
    #[default]
    Cookie,
    LocalStorage,
}

/// Endpoint path table, keyed the way deployments override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub login: String,
    pub places: String,
    pub place_details: String,
    pub reviews: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/api/v1/auth/login".to_string(),
            places: "/api/v1/places".to_string(),
            place_details: "/api/v1/places".to_string(),
            reviews: "/api/v1/reviews".to_string(),
        }
    }
}

/// Where the backend lives and how its paths are spelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
}

impl ApiConfig {
    /// Builds a config for a backend origin. A trailing slash on the origin
    /// is dropped so joining cannot produce `//`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            endpoints: Endpoints::default(),
        }
    }

    /// Joins the base URL with an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend to talk to; `None` means catalog-only mode.
    pub api: Option<ApiConfig>,
    pub token_store: TokenStore,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: Some(ApiConfig::default()),
            token_store: TokenStore::default(),
        }
    }
}

impl AppConfig {
    /// Catalog-only mode: no backend, every page serves local data.
    pub fn offline() -> Self {
        Self {
            api: None,
            token_store: TokenStore::default(),
        }
    }
}
