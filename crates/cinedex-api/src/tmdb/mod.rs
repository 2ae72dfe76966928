//! TMDB API client module.
//!
//! Sends requests to the TMDB API v3 endpoints with client-wide defaults
//! (`language`, `region`, `include_adult`) merged into every call, and
//! decodes responses into typed structs.

mod api;
mod auth;
mod client;
mod endpoints;
mod error;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
pub use auth::Credentials;
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{ParseEnumError, TmdbApiError};
pub use params::{
    APPEND_TO_RESPONSE, DetailsParams, DiscoverParams, ExternalSource, FindParams, GenreKind,
    INCLUDE_ADULT, LANGUAGE, ListParams, MovieList, REGION, RatingSession, RequestDefaults,
    RequestParams, SearchMovieParams, SearchParams, SearchTvParams, TimeWindow,
    TrendingMediaType, TvList,
};
pub use types::{
    ApiConfiguration, CastMember, CollectionDetails, CollectionRef, CollectionSummary,
    CompanyDetails, CompanySummary, Creator, Credits, CrewMember, DateWindow, Episode,
    ExternalIds, FindResponse, Genre, GenreList, GuestSession, ImagesConfiguration, Keyword,
    MediaResult, MovieDetails, MovieSummary, Network, Paginated, PersonDetails, PersonSummary,
    ProductionCompany, ProductionCountry, SeasonDetails, SeasonSummary, SpokenLanguage,
    StatusResponse, TvDetails, TvSummary, Video, Videos,
};
