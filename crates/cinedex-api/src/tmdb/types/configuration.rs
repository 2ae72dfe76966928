//! API configuration and session types.

use serde::{Deserialize, Serialize};

/// Response from `configuration`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfiguration {
    /// Image CDN settings.
    pub images: ImagesConfiguration,
    /// Keys reported by the change endpoints.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// Image CDN settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Backdrop sizes (e.g. `w300`, `original`).
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

impl ImagesConfiguration {
    /// Builds a full image URL from a size name and a `*_path` value.
    ///
    /// Example: `("w500", "/abc.jpg")` → `https://image.tmdb.org/t/p/w500/abc.jpg`.
    #[must_use]
    pub fn image_url(&self, size: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.secure_base_url.trim_end_matches('/'),
            size.trim_matches('/'),
            path.trim_start_matches('/'),
        )
    }
}

/// Response from `authentication/guest_session/new`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuestSession {
    /// Whether the session was created.
    #[serde(default)]
    pub success: bool,
    /// Session ID to pass as `guest_session_id`.
    pub guest_session_id: String,
    /// Expiry timestamp (UTC).
    pub expires_at: Option<String>,
}
