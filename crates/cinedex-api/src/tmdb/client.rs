//! `TmdbClient` - TMDB API client implementation.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::auth::{Credentials, redact_url};
use super::error::TmdbApiError;
use super::params::{DEFAULT_LANGUAGE, DEFAULT_REGION, RequestDefaults, RequestParams};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Holds credentials, the base URL and the default `language`, `region`
/// and `include_adult` values merged into every request.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key or bearer token.
    credentials: Credentials,
    /// Values merged into every request.
    defaults: RequestDefaults,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    language: Option<String>,
    region: Option<String>,
    include_adult: Option<bool>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            user_agent: None,
            language: None,
            region: None,
            include_adult: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (default: `https://api.themoviedb.org/3`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticates with a v3 API key (sent as the `api_key` query parameter).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(key.into()));
        self
    }

    /// Authenticates with a v4 read access token (sent as a Bearer header).
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::BearerToken(token.into()));
        self
    }

    /// Sets the credentials directly.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the User-Agent (default: `cinedex-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default response language (default: `en-US`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the default region (default: `US`).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the default adult content filter (default: `false`).
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    /// Sets a whole-request timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - No credentials are set, or the secret is blank.
    /// - The default language or region is blank.
    /// - The base URL cannot carry a path, or has a query or fragment.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credentials = self
            .credentials
            .context("credentials are required (api_key or bearer_token)")?;
        if credentials.secret().trim().is_empty() {
            bail!("{} must not be empty", credentials.scheme());
        }

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot carry a path: {base_url}");
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            bail!("base URL must not carry a query or fragment");
        }

        let defaults = RequestDefaults {
            language: non_blank("language", self.language, DEFAULT_LANGUAGE)?,
            region: non_blank("region", self.region, DEFAULT_REGION)?,
            include_adult: self.include_adult.unwrap_or(false),
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        let mut http_builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http_client = http_builder
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            credentials,
            defaults,
        })
    }
}

/// Returns `value` or `default`, rejecting blank strings.
fn non_blank(name: &str, value: Option<String>, default: &str) -> Result<String> {
    let value = value.unwrap_or_else(|| String::from(default));
    if value.trim().is_empty() {
        bail!("{name} must not be empty");
    }
    Ok(value)
}

/// Splits a `/`-separated endpoint path into segments.
fn split_path(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        bail!("endpoint path must not be empty");
    }
    Ok(segments)
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Base URL requests are made against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Values merged into every request.
    #[must_use]
    pub const fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Sends a GET request to an endpoint without a typed wrapper.
    ///
    /// `path` is relative to the base URL (e.g. `movie/550/keywords`) and
    /// must not contain a query string; use `params` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, the request fails, TMDB
    /// answers with a non-2xx status, or the JSON body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: RequestParams) -> Result<T> {
        let segments = split_path(path)?;
        self.request(Method::GET, &segments, params, None).await
    }

    /// Sends a POST request with a JSON body to an endpoint without a typed wrapper.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus body serialization failures.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        params: RequestParams,
        body: &B,
    ) -> Result<T> {
        let segments = split_path(path)?;
        let body = serde_json::to_value(body).context("failed to serialize request body")?;
        self.request(Method::POST, &segments, params, Some(&body))
            .await
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds and sends a request, then classifies the response.
    ///
    /// Merges the client defaults into `params`, attaches credentials
    /// (query `api_key` or Bearer header) and `Accept: application/json`.
    /// 2xx bodies decode into `T`; anything else becomes a [`TmdbApiError`].
    #[instrument(skip_all, fields(method = %method, path = %segments.join("/")))]
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        params: RequestParams,
        body: Option<&Value>,
    ) -> Result<T> {
        let path = segments.join("/");
        let url = self.endpoint_url(segments)?;
        let query = params.into_query(&self.defaults, &self.credentials);

        let mut builder = self
            .http_client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json")
            .query(&query);
        if let Credentials::BearerToken(token) = &self.credentials {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %redact_url(request.url()), "TMDB API request");

        // reqwest errors embed the full URL, which may carry the api_key.
        let result = self.http_client.execute(request).await;
        let response = result
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request failed: {method} {path}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("failed to read response body: {path}"))?;

        if !status.is_success() {
            let error = TmdbApiError::from_body(status.as_u16(), &text);
            tracing::warn!(
                http_status = error.http_status,
                status_code = ?error.status_code,
                message = %error.status_message,
                "TMDB API error response"
            );
            return Err(error.into());
        }

        let mut deserializer = serde_json::Deserializer::from_str(&text);
        let parsed = serde_path_to_error::deserialize(&mut deserializer)
            .with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(parsed)
    }
}
