//! Error taxonomy for API calls.

use aaaj_core::error::CoreError;

/// Errors surfaced by [`crate::ApiClient`] methods.
///
/// Input problems (`Validation`, `Core`) are raised before any request is
/// sent. Status-mapped variants mirror how the site treats backend
/// responses: 401 invalidates the session token, 403/404 are shown as-is,
/// 5xx is a server fault. Everything carries enough context to display or
/// log without re-fetching.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connect, DNS, TLS, timeout, or
    /// body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unauthorized: session token missing, expired or invalid")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Any other non-2xx response.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A payload failed field validation before being sent.
    #[error("invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A payload failed a domain rule before being sent.
    #[error(transparent)]
    Core(#[from] CoreError),
}
