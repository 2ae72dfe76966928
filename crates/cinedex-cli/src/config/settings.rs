//! Effective client settings: CLI flag > config file > library default.

use anyhow::{Context, Result, bail};
use url::Url;

use cinedex_api::tmdb::{Credentials, TmdbClient};

use super::TmdbConfig;

/// Environment variable holding a v4 read access token.
pub const TOKEN_ENV: &str = "TMDB_API_TOKEN";
/// Environment variable holding a v3 API key.
pub const KEY_ENV: &str = "TMDB_API_KEY";

/// Values given as global CLI flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--language`.
    pub language: Option<String>,
    /// `--region`.
    pub region: Option<String>,
    /// `--include-adult`.
    pub include_adult: Option<bool>,
}

/// Reads credentials from `TMDB_API_TOKEN` or `TMDB_API_KEY`.
///
/// # Errors
///
/// Returns an error if neither variable holds a non-blank value.
pub fn credentials_from_env() -> Result<Credentials> {
    resolve_credentials(std::env::var(TOKEN_ENV).ok(), std::env::var(KEY_ENV).ok())
}

/// Picks credentials, preferring the bearer token over the API key.
fn resolve_credentials(token: Option<String>, key: Option<String>) -> Result<Credentials> {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    if let Some(token) = non_blank(token) {
        return Ok(Credentials::BearerToken(token));
    }
    if let Some(key) = non_blank(key) {
        return Ok(Credentials::ApiKey(key));
    }
    bail!("{TOKEN_ENV} or {KEY_ENV} environment variable is required")
}

/// Builds a `TmdbClient` from the config table and CLI overrides.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the client
/// fails to build.
pub fn build_client(
    config: &TmdbConfig,
    overrides: &CliOverrides,
    credentials: Credentials,
) -> Result<TmdbClient> {
    let mut builder = TmdbClient::builder()
        .credentials(credentials)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

    if let Some(ref base_url) = config.base_url {
        let url = Url::parse(base_url)
            .with_context(|| format!("invalid base_url '{base_url}' in config"))?;
        builder = builder.base_url(url);
    }
    if let Some(language) = overrides.language.as_ref().or(config.language.as_ref()) {
        builder = builder.language(language);
    }
    if let Some(region) = overrides.region.as_ref().or(config.region.as_ref()) {
        builder = builder.region(region);
    }
    if let Some(include_adult) = overrides.include_adult.or(config.include_adult) {
        builder = builder.include_adult(include_adult);
    }
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to build TMDB client")
}
