//! Shared domain layer for the StayHub client.
//!
//! Everything in this crate is browser-agnostic: normalized models, the wire
//! protocol, the local fallback catalog and the pure display helpers. The
//! frontend crate layers DOM and network access on top.

pub mod catalog;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod protocol;

use serde::{Deserialize, Serialize};

// =========================================================
// Constants
// =========================================================

/// Cookie holding the session token in cookie-backed deployments.
pub const TOKEN_COOKIE: &str = "token";
/// localStorage key holding the session token in storage-backed deployments.
pub const TOKEN_STORAGE_KEY: &str = "stayhub_token";
/// localStorage key holding the signed-in account email.
pub const EMAIL_STORAGE_KEY: &str = "stayhub_user_email";

/// Class toggled on `<body>` while a session is active.
pub const AUTH_BODY_CLASS: &str = "authenticated";
/// Display identity when no usable email is on record.
pub const GUEST_NAME: &str = "Guest";
/// Listing shown when a detail page is opened without an `id` parameter.
pub const DEFAULT_PLACE_ID: &str = "1";

// =========================================================
// Domain Models
// =========================================================

/// A rentable listing in its normalized shape.
///
/// The API has served two generations of field names for the same data;
/// [`protocol::PlaceDto`] folds both into this one struct so nothing past
/// the client boundary ever branches on payload vintage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub price_per_night: f64,
    /// Host display name; the API omits it for some listings.
    pub host: Option<String>,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub description: String,
    pub amenities: Vec<String>,
    /// Emoji used as the card illustration.
    pub icon: Option<String>,
}

/// A guest review, already in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to 5 inclusive.
    pub rating: u8,
    pub comment: String,
    /// Long en-US date, e.g. `January 15, 2025`.
    pub date: String,
}

/// A signed-in session: the bearer token plus the account email it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    /// Kept for display identity only; absent when the persisted session
    /// predates email storage.
    pub email: Option<String>,
}

impl Credential {
    pub fn new(token: impl Into<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            email,
        }
    }

    /// `Authorization` header value for this session.
    pub fn bearer_value(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Short display identity: the part of the email before `@`, or
    /// [`GUEST_NAME`] when no usable email is on record.
    pub fn display_name(&self) -> String {
        let name = self
            .email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .unwrap_or_default();
        if name.is_empty() {
            GUEST_NAME.to_string()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_takes_local_part_of_email() {
        let cred = Credential::new("tok", Some("sarah.j@example.com".to_string()));
        assert_eq!(cred.display_name(), "sarah.j");
    }

    #[test]
    fn display_name_without_email_is_guest() {
        assert_eq!(Credential::new("tok", None).display_name(), "Guest");
    }

    #[test]
    fn display_name_with_empty_email_is_guest() {
        let cred = Credential::new("tok", Some(String::new()));
        assert_eq!(cred.display_name(), "Guest");
    }

    #[test]
    fn display_name_keeps_emailless_usernames_whole() {
        let cred = Credential::new("tok", Some("frontdesk".to_string()));
        assert_eq!(cred.display_name(), "frontdesk");
    }

    #[test]
    fn bearer_value_formats_authorization_header() {
        let cred = Credential::new("abc123", None);
        assert_eq!(cred.bearer_value(), "Bearer abc123");
    }
}
