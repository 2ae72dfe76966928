//! TMDB credentials and secret redaction.

use std::fmt;

use url::Url;

/// Query parameter used for v3 API key authentication.
pub(crate) const API_KEY_PARAM: &str = "api_key";

/// Placeholder written in place of secrets.
const REDACTED: &str = "***";

/// Credentials used to authenticate against TMDB.
///
/// An API key is sent as the `api_key` query parameter. A bearer token
/// (the v4 "API read access token") is sent in the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v3 API key, sent as a query parameter.
    ApiKey(String),
    /// v4 read access token, sent as `Authorization: Bearer <token>`.
    BearerToken(String),
}

impl Credentials {
    /// Returns the raw secret.
    pub(crate) fn secret(&self) -> &str {
        match self {
            Self::ApiKey(s) | Self::BearerToken(s) => s,
        }
    }

    /// Short name of the authentication scheme.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api_key",
            Self::BearerToken(_) => "bearer",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&REDACTED).finish(),
            Self::BearerToken(_) => f.debug_tuple("BearerToken").field(&REDACTED).finish(),
        }
    }
}

/// Renders a URL for logging with the `api_key` value masked.
pub(crate) fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == API_KEY_PARAM {
                String::from(REDACTED)
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_debug_hides_api_key() {
        // Arrange
        let creds = Credentials::ApiKey(String::from("super-secret"));

        // Act
        let rendered = format!("{creds:?}");

        // Assert
        assert_eq!(rendered, r#"ApiKey("***")"#);
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_debug_hides_bearer_token() {
        // Arrange
        let creds = Credentials::BearerToken(String::from("eyJhbGciOi"));

        // Act
        let rendered = format!("{creds:?}");

        // Assert
        assert!(rendered.starts_with("BearerToken"));
        assert!(!rendered.contains("eyJhbGciOi"));
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(Credentials::ApiKey(String::from("k")).scheme(), "api_key");
        assert_eq!(
            Credentials::BearerToken(String::from("t")).scheme(),
            "bearer"
        );
    }

    #[test]
    fn test_redact_url_masks_api_key() {
        // Arrange
        let url = Url::parse(
            "https://api.themoviedb.org/3/movie/550?api_key=abc123&language=en-US",
        )
        .unwrap();

        // Act
        let rendered = redact_url(&url);

        // Assert
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("api_key=***") || rendered.contains("api_key=%2A%2A%2A"));
        assert!(rendered.contains("language=en-US"));
    }

    #[test]
    fn test_redact_url_without_api_key_is_unchanged() {
        // Arrange
        let url = Url::parse("https://api.themoviedb.org/3/movie/550?language=en-US").unwrap();

        // Act
        let rendered = redact_url(&url);

        // Assert
        assert_eq!(rendered, url.to_string());
    }
}
