//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::params::{
    DetailsParams, DiscoverParams, FindParams, GenreKind, ListParams, MovieList, RatingSession,
    SearchMovieParams, SearchParams, SearchTvParams, TimeWindow, TrendingMediaType, TvList,
};
use super::types::{
    ApiConfiguration, CollectionDetails, CollectionSummary, CompanyDetails, CompanySummary,
    Episode, FindResponse, GenreList, GuestSession, Keyword, MediaResult, MovieDetails,
    MovieSummary, Paginated, PersonDetails, PersonSummary, SeasonDetails, StatusResponse,
    TvDetails, TvSummary,
};

/// TMDB API trait.
///
/// One method per endpoint. Abstracts API operations for mock substitution
/// in tests. Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every method returns an error if the HTTP request fails, if TMDB answers
/// with a non-2xx status (a [`TmdbApiError`](super::TmdbApiError) inside the
/// `anyhow::Error`), or if the JSON body does not match the response type.
#[allow(clippy::module_name_repetitions)]
#[allow(clippy::missing_errors_doc)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Looks up movies, people and series by an external ID.
    async fn find(&self, external_id: &str, params: &FindParams) -> Result<FindResponse>;

    /// Searches for movies.
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paginated<MovieSummary>>;

    /// Searches for TV series.
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paginated<TvSummary>>;

    /// Searches for people.
    async fn search_person(&self, params: &SearchParams) -> Result<Paginated<PersonSummary>>;

    /// Searches movies, series and people at once.
    async fn search_multi(&self, params: &SearchParams) -> Result<Paginated<MediaResult>>;

    /// Searches for collections.
    async fn search_collection(
        &self,
        params: &SearchParams,
    ) -> Result<Paginated<CollectionSummary>>;

    /// Searches for companies.
    async fn search_company(&self, params: &SearchParams) -> Result<Paginated<CompanySummary>>;

    /// Searches for keywords.
    async fn search_keyword(&self, params: &SearchParams) -> Result<Paginated<Keyword>>;

    /// Fetches movie details, optionally with appended resources.
    async fn movie_details(&self, movie_id: u64, params: &DetailsParams) -> Result<MovieDetails>;

    /// Fetches a curated movie list.
    async fn movie_list(
        &self,
        list: MovieList,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>>;

    /// Fetches recommendations for a movie.
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>>;

    /// Fetches movies similar to a movie.
    async fn movie_similar(
        &self,
        movie_id: u64,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>>;

    /// Fetches TV series details including season list.
    async fn tv_details(&self, series_id: u64, params: &DetailsParams) -> Result<TvDetails>;

    /// Fetches a curated TV list.
    async fn tv_list(&self, list: TvList, params: &ListParams) -> Result<Paginated<TvSummary>>;

    /// Fetches TV season details including episode list.
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        params: &DetailsParams,
    ) -> Result<SeasonDetails>;

    /// Fetches a single TV episode.
    async fn tv_episode(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        params: &DetailsParams,
    ) -> Result<Episode>;

    /// Fetches person details.
    async fn person_details(
        &self,
        person_id: u64,
        params: &DetailsParams,
    ) -> Result<PersonDetails>;

    /// Fetches a collection and its movies.
    async fn collection_details(
        &self,
        collection_id: u64,
        params: &DetailsParams,
    ) -> Result<CollectionDetails>;

    /// Fetches company details.
    async fn company_details(&self, company_id: u64) -> Result<CompanyDetails>;

    /// Lists movie or TV genres.
    async fn genres(&self, kind: GenreKind, language: Option<&str>) -> Result<GenreList>;

    /// Fetches trending movies, series and/or people.
    async fn trending(
        &self,
        media_type: TrendingMediaType,
        window: TimeWindow,
        params: &ListParams,
    ) -> Result<Paginated<MediaResult>>;

    /// Discovers movies by filter.
    async fn discover_movie(&self, params: &DiscoverParams) -> Result<Paginated<MovieSummary>>;

    /// Discovers TV series by filter.
    async fn discover_tv(&self, params: &DiscoverParams) -> Result<Paginated<TvSummary>>;

    /// Fetches the API configuration (image CDN settings).
    async fn configuration(&self) -> Result<ApiConfiguration>;

    /// Creates a guest session usable for ratings.
    async fn create_guest_session(&self) -> Result<GuestSession>;

    /// Rates a movie (0.5 to 10.0).
    async fn rate_movie(
        &self,
        movie_id: u64,
        value: f64,
        session: &RatingSession,
    ) -> Result<StatusResponse>;

    /// Rates a TV series (0.5 to 10.0).
    async fn rate_tv(
        &self,
        series_id: u64,
        value: f64,
        session: &RatingSession,
    ) -> Result<StatusResponse>;
}
