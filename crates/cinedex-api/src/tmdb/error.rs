//! TMDB error types.

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of characters kept from a non-JSON error body.
const MAX_BODY_PREVIEW: usize = 500;

/// TMDB `status_code` for an invalid API key.
const CODE_INVALID_API_KEY: u32 = 7;

/// TMDB `status_code` for authentication failures.
const CODE_AUTHENTICATION_FAILED: u32 = 3;

/// TMDB `status_code` for a missing resource.
const CODE_NOT_FOUND: u32 = 34;

/// Error body returned by TMDB on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TmdbErrorBody {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
}

/// A non-2xx response from the TMDB API.
///
/// Returned inside `anyhow::Error`; recover it with
/// `err.downcast_ref::<TmdbApiError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "TMDB API error (HTTP {http_status}): code={}, message={status_message}",
    code_label(.status_code)
)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbApiError {
    /// HTTP status of the response.
    pub http_status: u16,
    /// TMDB `status_code`, when the body was a TMDB error document.
    pub status_code: Option<u32>,
    /// TMDB `status_message`, or the raw body when it was not JSON.
    pub status_message: String,
}

#[allow(clippy::ref_option)]
fn code_label(code: &Option<u32>) -> String {
    code.map_or_else(|| String::from("-"), |c| c.to_string())
}

impl TmdbApiError {
    /// Classifies a non-2xx response body.
    pub(crate) fn from_body(http_status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<TmdbErrorBody>(body) {
            return Self {
                http_status,
                status_code: Some(parsed.status_code),
                status_message: parsed.status_message,
            };
        }

        let trimmed = body.trim();
        let status_message = if trimmed.is_empty() {
            String::from("<empty body>")
        } else {
            trimmed.chars().take(MAX_BODY_PREVIEW).collect()
        };
        Self {
            http_status,
            status_code: None,
            status_message,
        }
    }

    /// Whether the requested resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.http_status == 404 || self.status_code == Some(CODE_NOT_FOUND)
    }

    /// Whether the credentials were rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.http_status == 401
            || matches!(
                self.status_code,
                Some(CODE_INVALID_API_KEY | CODE_AUTHENTICATION_FAILED)
            )
    }
}

/// A string did not name a known variant of a parameter enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: String::from(value),
            expected: expected.join(", "),
        }
    }
}
