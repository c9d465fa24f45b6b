//! Failure taxonomy for the API client.
//!
//! Every failure a page can see is an [`ApiError`]: a coarse kind driving
//! behavior (fallback or surface) plus a human-readable message. The kind is
//! derived from the HTTP status, the message preferably from the response
//! body's `error`/`message` field.

use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// Error kinds
// =========================================================

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// A form precondition failed locally; no request was made.
    Validation,
    /// 401: missing or rejected credentials.
    Unauthorized,
    /// 429: the client is sending too fast.
    RateLimited,
    /// 5xx: the backend failed.
    Server,
    /// The request never produced an HTTP response, or the response body
    /// could not be decoded.
    Transport,
    /// Any other non-success status.
    Generic,
}

impl ApiErrorKind {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            s if s >= 500 => Self::Server,
            _ => Self::Generic,
        }
    }

    /// Stable identifier used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RateLimited => "RATE_LIMITED",
            Self::Server => "SERVER_ERROR",
            Self::Transport => "TRANSPORT_ERROR",
            Self::Generic => "REQUEST_FAILED",
        }
    }

    /// Whether the local catalog may stand in for this failure.
    ///
    /// Only outages qualify. Auth and rate-limit rejections must stay
    /// visible, otherwise substituting data would mask them.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(self, Self::Server | Self::Transport)
    }
}

// =========================================================
// ApiError
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message)
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Generic, message)
    }

    /// Builds the error for a non-success response.
    ///
    /// The status picks the kind; the body's `error`/`message` field, when
    /// present, replaces the generic status message so the user sees what
    /// the backend actually said.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = ErrorBody::extract(body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::new(ApiErrorKind::from_status(status), message)
    }

    pub fn is_fallback_eligible(&self) -> bool {
        self.kind.is_fallback_eligible()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

// =========================================================
// Error body
// =========================================================

/// JSON payload shape the API uses for failures.
///
/// Older revisions answered `{"error": ...}`, newer ones `{"message": ...}`;
/// both are accepted, `error` wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Pulls the human-readable message out of a raw error body, if any.
    pub fn extract(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed.error.or(parsed.message).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
    }

    #[test]
    fn status_429_is_rate_limited() {
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
    }

    #[test]
    fn server_errors_cover_the_whole_5xx_range() {
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(599), ApiErrorKind::Server);
    }

    #[test]
    fn other_statuses_are_generic() {
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Generic);
    }

    #[test]
    fn only_outages_are_fallback_eligible() {
        assert!(ApiErrorKind::Server.is_fallback_eligible());
        assert!(ApiErrorKind::Transport.is_fallback_eligible());
        assert!(!ApiErrorKind::Unauthorized.is_fallback_eligible());
        assert!(!ApiErrorKind::RateLimited.is_fallback_eligible());
        assert!(!ApiErrorKind::Validation.is_fallback_eligible());
        assert!(!ApiErrorKind::Generic.is_fallback_eligible());
    }

    #[test]
    fn from_response_prefers_the_body_error_field() {
        let err = ApiError::from_response(401, r#"{"error": "Invalid credentials"}"#);
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn from_response_accepts_the_message_field() {
        let err = ApiError::from_response(500, r#"{"message": "boom"}"#);
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn from_response_falls_back_to_a_status_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "request failed with status 502");
    }

    #[test]
    fn from_response_ignores_an_empty_error_field() {
        let err = ApiError::from_response(429, r#"{"error": ""}"#);
        assert_eq!(err.message, "request failed with status 429");
    }

    #[test]
    fn display_includes_the_code() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "[TRANSPORT_ERROR] connection refused");
    }
}
