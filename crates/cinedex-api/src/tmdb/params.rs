//! TMDB request parameters and default merging.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::auth::{API_KEY_PARAM, Credentials};
use super::error::ParseEnumError;

/// Reserved key: response language.
pub const LANGUAGE: &str = "language";
/// Reserved key: region filter.
pub const REGION: &str = "region";
/// Reserved key: adult content filter.
pub const INCLUDE_ADULT: &str = "include_adult";
/// Reserved key: related resources to embed in a details response.
pub const APPEND_TO_RESPONSE: &str = "append_to_response";

/// Default response language.
pub(crate) const DEFAULT_LANGUAGE: &str = "en-US";
/// Default region.
pub(crate) const DEFAULT_REGION: &str = "US";

/// Client-wide values merged into every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    /// Default `language` (ISO 639-1 with optional region, e.g. `ja-JP`).
    pub language: String,
    /// Default `region` (ISO 3166-1).
    pub region: String,
    /// Default `include_adult`.
    pub include_adult: bool,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            language: String::from(DEFAULT_LANGUAGE),
            region: String::from(DEFAULT_REGION),
            include_adult: false,
        }
    }
}

/// Per-call query parameters.
///
/// A flat key/value map. The reserved keys `language`, `region` and
/// `include_adult` fall back to the client defaults unless set or
/// explicitly [`unset`](Self::unset). `append_to_response` is kept as a
/// list and sent comma-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// `None` marks a key that was unset on purpose.
    entries: BTreeMap<String, Option<String>>,
    append_to_response: Vec<String>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter.
    ///
    /// `append_to_response` given here is split on commas and added to
    /// the list.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        if key == APPEND_TO_RESPONSE {
            return self.append_to_response(value.split(','));
        }
        self.entries.insert(key, Some(value));
        self
    }

    /// Sets a parameter when `value` is `Some`.
    #[must_use]
    pub fn param_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Marks a key as absent, suppressing any client default for it.
    #[must_use]
    pub fn unset(mut self, key: impl Into<String>) -> Self {
        self.entries.insert(key.into(), None);
        self
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(self, language: impl Into<String>) -> Self {
        self.param(LANGUAGE, language.into())
    }

    /// Sets the region.
    #[must_use]
    pub fn region(self, region: impl Into<String>) -> Self {
        self.param(REGION, region.into())
    }

    /// Sets the adult content filter.
    #[must_use]
    pub fn include_adult(self, include_adult: bool) -> Self {
        self.param(INCLUDE_ADULT, include_adult)
    }

    /// Sets the result page.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Adds related resources to embed (`credits`, `videos`, ...).
    ///
    /// Blank names are ignored.
    #[must_use]
    pub fn append_to_response<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.append_to_response.extend(
            items
                .into_iter()
                .map(|s| s.as_ref().trim().to_owned())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    /// Returns the value set for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Option::as_deref)
    }

    /// Whether `key` was set or unset by the caller.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Related resources requested so far.
    #[must_use]
    pub fn appended(&self) -> &[String] {
        &self.append_to_response
    }

    /// Merges defaults and credentials into the final query pairs.
    ///
    /// Caller values win over defaults; the API key always wins over a
    /// caller-supplied `api_key`. Pairs come out sorted by key.
    pub(crate) fn into_query(
        self,
        defaults: &RequestDefaults,
        credentials: &Credentials,
    ) -> Vec<(String, String)> {
        let Self {
            mut entries,
            append_to_response,
        } = self;

        entries
            .entry(String::from(LANGUAGE))
            .or_insert_with(|| Some(defaults.language.clone()));
        entries
            .entry(String::from(REGION))
            .or_insert_with(|| Some(defaults.region.clone()));
        entries
            .entry(String::from(INCLUDE_ADULT))
            .or_insert_with(|| Some(defaults.include_adult.to_string()));

        if append_to_response.is_empty() {
            entries.remove(APPEND_TO_RESPONSE);
        } else {
            entries.insert(
                String::from(APPEND_TO_RESPONSE),
                Some(append_to_response.join(",")),
            );
        }

        if let Credentials::ApiKey(key) = credentials {
            entries.insert(String::from(API_KEY_PARAM), Some(key.clone()));
        }

        entries
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }
}

/// Declares a string-backed parameter enum with `as_str`, `Display` and `FromStr`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError::new($kind, s, &[$($text),+]))
            }
        }
    };
}

string_enum! {
    /// External ID namespace accepted by `find`.
    ExternalSource, "external source" {
        /// IMDb (`tt0111161`, `nm0000151`).
        Imdb => "imdb_id",
        /// Freebase MID.
        FreebaseMid => "freebase_mid",
        /// Freebase ID.
        FreebaseId => "freebase_id",
        /// TheTVDB.
        Tvdb => "tvdb_id",
        /// TVRage.
        Tvrage => "tvrage_id",
        /// Facebook.
        Facebook => "facebook_id",
        /// Twitter / X.
        Twitter => "twitter_id",
        /// Instagram.
        Instagram => "instagram_id",
    }
}

string_enum! {
    /// Media type for trending lists.
    TrendingMediaType, "media type" {
        /// Movies, TV and people.
        All => "all",
        /// Movies only.
        Movie => "movie",
        /// TV series only.
        Tv => "tv",
        /// People only.
        Person => "person",
    }
}

string_enum! {
    /// Trending time window.
    TimeWindow, "time window" {
        /// Last 24 hours.
        Day => "day",
        /// Last 7 days.
        Week => "week",
    }
}

string_enum! {
    /// Curated movie lists.
    MovieList, "movie list" {
        /// `movie/popular`.
        Popular => "popular",
        /// `movie/top_rated`.
        TopRated => "top_rated",
        /// `movie/now_playing`.
        NowPlaying => "now_playing",
        /// `movie/upcoming`.
        Upcoming => "upcoming",
    }
}

string_enum! {
    /// Curated TV lists.
    TvList, "tv list" {
        /// `tv/popular`.
        Popular => "popular",
        /// `tv/top_rated`.
        TopRated => "top_rated",
        /// `tv/airing_today`.
        AiringToday => "airing_today",
        /// `tv/on_the_air`.
        OnTheAir => "on_the_air",
    }
}

string_enum! {
    /// Media kind for genre lists.
    GenreKind, "genre kind" {
        /// `genre/movie/list`.
        Movie => "movie",
        /// `genre/tv/list`.
        Tv => "tv",
    }
}

// --- Endpoint parameters ---

/// Parameters for `find/{external_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindParams {
    /// Namespace of the external ID (required).
    pub external_source: ExternalSource,
    /// Response language (default: client language).
    pub language: Option<String>,
}

impl FindParams {
    /// Creates find params for the given source.
    #[must_use]
    pub const fn new(external_source: ExternalSource) -> Self {
        Self {
            external_source,
            language: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl From<&FindParams> for RequestParams {
    fn from(p: &FindParams) -> Self {
        Self::new()
            .param("external_source", p.external_source)
            .param_opt(LANGUAGE, p.language.as_deref())
    }
}

/// Parameters for `search/movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: client language).
    pub language: Option<String>,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Filter by any release year.
    pub year: Option<u32>,
    /// Region filter (ISO 3166-1, default: client region).
    pub region: Option<String>,
    /// Include adult content (default: client setting).
    pub include_adult: Option<bool>,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: 1,
            primary_release_year: None,
            year: None,
            region: None,
            include_adult: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the adult content filter.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }
}

impl From<&SearchMovieParams> for RequestParams {
    fn from(p: &SearchMovieParams) -> Self {
        Self::new()
            .param("query", &p.query)
            .page(p.page)
            .param_opt(LANGUAGE, p.language.as_deref())
            .param_opt(REGION, p.region.as_deref())
            .param_opt(INCLUDE_ADULT, p.include_adult)
            .param_opt("primary_release_year", p.primary_release_year)
            .param_opt("year", p.year)
    }
}

/// Parameters for `search/tv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTvParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: client language).
    pub language: Option<String>,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by first air date year.
    pub first_air_date_year: Option<u32>,
    /// Filter by year (searches first air date and episode air dates).
    pub year: Option<u32>,
    /// Include adult content (default: client setting).
    pub include_adult: Option<bool>,
}

impl SearchTvParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: 1,
            first_air_date_year: None,
            year: None,
            include_adult: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the first air date year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the adult content filter.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }
}

impl From<&SearchTvParams> for RequestParams {
    fn from(p: &SearchTvParams) -> Self {
        Self::new()
            .param("query", &p.query)
            .page(p.page)
            .param_opt(LANGUAGE, p.language.as_deref())
            .param_opt(INCLUDE_ADULT, p.include_adult)
            .param_opt("first_air_date_year", p.first_air_date_year)
            .param_opt("year", p.year)
    }
}

/// Parameters shared by the person, multi, collection, company and keyword searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: client language).
    pub language: Option<String>,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content (default: client setting).
    pub include_adult: Option<bool>,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: 1,
            include_adult: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the adult content filter.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }
}

impl From<&SearchParams> for RequestParams {
    fn from(p: &SearchParams) -> Self {
        Self::new()
            .param("query", &p.query)
            .page(p.page)
            .param_opt(LANGUAGE, p.language.as_deref())
            .param_opt(INCLUDE_ADULT, p.include_adult)
    }
}

/// Parameters for details endpoints (`movie/{id}`, `tv/{id}`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsParams {
    /// Response language (default: client language).
    pub language: Option<String>,
    /// Related resources to embed (`credits`, `videos`, `external_ids`, ...).
    pub append_to_response: Vec<String>,
}

impl DetailsParams {
    /// Creates empty details params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Adds related resources to embed.
    #[must_use]
    pub fn append<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append_to_response
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl From<&DetailsParams> for RequestParams {
    fn from(p: &DetailsParams) -> Self {
        Self::new()
            .param_opt(LANGUAGE, p.language.as_deref())
            .append_to_response(&p.append_to_response)
    }
}

/// Parameters for paginated list endpoints (curated lists, trending, recommendations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Response language (default: client language).
    pub language: Option<String>,
    /// Region filter (default: client region).
    pub region: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            language: None,
            region: None,
        }
    }
}

impl ListParams {
    /// Creates list params for page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

impl From<&ListParams> for RequestParams {
    fn from(p: &ListParams) -> Self {
        Self::new()
            .page(p.page)
            .param_opt(LANGUAGE, p.language.as_deref())
            .param_opt(REGION, p.region.as_deref())
    }
}

/// Parameters for `discover/movie` and `discover/tv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverParams {
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Sort order (e.g. `popularity.desc`).
    pub sort_by: Option<String>,
    /// Genre IDs that must all match.
    pub with_genres: Vec<u32>,
    /// Original language filter (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Release year (movies) or first air year (TV).
    pub year: Option<u32>,
    /// Any other discover filter, passed through verbatim.
    pub extra: RequestParams,
}

impl Default for DiscoverParams {
    fn default() -> Self {
        Self {
            page: 1,
            sort_by: None,
            with_genres: Vec::new(),
            with_original_language: None,
            year: None,
            extra: RequestParams::new(),
        }
    }
}

impl DiscoverParams {
    /// Creates discover params for page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn with_genres(mut self, genres: impl IntoIterator<Item = u32>) -> Self {
        self.with_genres = genres.into_iter().collect();
        self
    }

    /// Sets the original language filter.
    #[must_use]
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.with_original_language = Some(language.into());
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Adds a raw discover filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.extra = self.extra.param(key, value);
        self
    }

    /// Builds request params, mapping `year` to the given key.
    pub(crate) fn to_request(&self, year_key: &str) -> RequestParams {
        let genres = (!self.with_genres.is_empty()).then(|| {
            self.with_genres
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });

        self.extra
            .clone()
            .page(self.page)
            .param_opt("sort_by", self.sort_by.as_deref())
            .param_opt("with_genres", genres)
            .param_opt("with_original_language", self.with_original_language.as_deref())
            .param_opt(year_key, self.year)
    }
}

/// Session used to authorise a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingSession {
    /// Guest session from `authentication/guest_session/new`.
    Guest(String),
    /// Authenticated user session.
    User(String),
}

impl From<&RatingSession> for RequestParams {
    fn from(s: &RatingSession) -> Self {
        match s {
            RatingSession::Guest(id) => Self::new().param("guest_session_id", id),
            RatingSession::User(id) => Self::new().param("session_id", id),
        }
    }
}
