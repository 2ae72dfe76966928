//! `LocalTmdbApi` implementation for `TmdbClient`.

use anyhow::{Result, bail};
use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use super::api::LocalTmdbApi;
use super::client::TmdbClient;
use super::params::{
    DetailsParams, DiscoverParams, FindParams, GenreKind, LANGUAGE, ListParams, MovieList,
    RatingSession, RequestParams, SearchMovieParams, SearchParams, SearchTvParams, TimeWindow,
    TrendingMediaType, TvList,
};
use super::types::{
    ApiConfiguration, CollectionDetails, CollectionSummary, CompanyDetails, CompanySummary,
    Episode, FindResponse, GenreList, GuestSession, Keyword, MediaResult, MovieDetails,
    MovieSummary, Paginated, PersonDetails, PersonSummary, SeasonDetails, StatusResponse,
    TvDetails, TvSummary,
};

/// Lowest accepted rating.
const MIN_RATING: f64 = 0.5;
/// Highest accepted rating.
const MAX_RATING: f64 = 10.0;

impl TmdbClient {
    async fn get_path<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        params: RequestParams,
    ) -> Result<T> {
        self.request(Method::GET, segments, params, None).await
    }

    /// Posts `{"value": v}` to a `rating` endpoint.
    ///
    /// TMDB accepts half-point steps only.
    async fn post_rating(
        &self,
        media: &str,
        id: u64,
        value: f64,
        session: &RatingSession,
    ) -> Result<StatusResponse> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            bail!("rating must be between {MIN_RATING} and {MAX_RATING}, got {value}");
        }
        if (value * 2.0).fract().abs() > f64::EPSILON {
            bail!("rating must be a multiple of 0.5, got {value}");
        }
        let id = id.to_string();
        let body = json!({ "value": value });
        self.request(
            Method::POST,
            &[media, &id, "rating"],
            RequestParams::from(session),
            Some(&body),
        )
        .await
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn find(&self, external_id: &str, params: &FindParams) -> Result<FindResponse> {
        if external_id.trim().is_empty() {
            bail!("external_id must not be empty");
        }
        self.get_path(&["find", external_id], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paginated<MovieSummary>> {
        self.get_path(&["search", "movie"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paginated<TvSummary>> {
        self.get_path(&["search", "tv"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_person(&self, params: &SearchParams) -> Result<Paginated<PersonSummary>> {
        self.get_path(&["search", "person"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_multi(&self, params: &SearchParams) -> Result<Paginated<MediaResult>> {
        self.get_path(&["search", "multi"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_collection(
        &self,
        params: &SearchParams,
    ) -> Result<Paginated<CollectionSummary>> {
        self.get_path(&["search", "collection"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_company(&self, params: &SearchParams) -> Result<Paginated<CompanySummary>> {
        self.get_path(&["search", "company"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn search_keyword(&self, params: &SearchParams) -> Result<Paginated<Keyword>> {
        self.get_path(&["search", "keyword"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64, params: &DetailsParams) -> Result<MovieDetails> {
        let id = movie_id.to_string();
        self.get_path(&["movie", &id], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn movie_list(
        &self,
        list: MovieList,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>> {
        self.get_path(&["movie", list.as_str()], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>> {
        let id = movie_id.to_string();
        self.get_path(
            &["movie", &id, "recommendations"],
            RequestParams::from(params),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn movie_similar(
        &self,
        movie_id: u64,
        params: &ListParams,
    ) -> Result<Paginated<MovieSummary>> {
        let id = movie_id.to_string();
        self.get_path(&["movie", &id, "similar"], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64, params: &DetailsParams) -> Result<TvDetails> {
        let id = series_id.to_string();
        self.get_path(&["tv", &id], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn tv_list(&self, list: TvList, params: &ListParams) -> Result<Paginated<TvSummary>> {
        self.get_path(&["tv", list.as_str()], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        params: &DetailsParams,
    ) -> Result<SeasonDetails> {
        let id = series_id.to_string();
        let season = season_number.to_string();
        self.get_path(&["tv", &id, "season", &season], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn tv_episode(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        params: &DetailsParams,
    ) -> Result<Episode> {
        let id = series_id.to_string();
        let season = season_number.to_string();
        let episode = episode_number.to_string();
        self.get_path(
            &["tv", &id, "season", &season, "episode", &episode],
            RequestParams::from(params),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn person_details(
        &self,
        person_id: u64,
        params: &DetailsParams,
    ) -> Result<PersonDetails> {
        let id = person_id.to_string();
        self.get_path(&["person", &id], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn collection_details(
        &self,
        collection_id: u64,
        params: &DetailsParams,
    ) -> Result<CollectionDetails> {
        let id = collection_id.to_string();
        self.get_path(&["collection", &id], RequestParams::from(params))
            .await
    }

    #[instrument(skip_all)]
    async fn company_details(&self, company_id: u64) -> Result<CompanyDetails> {
        let id = company_id.to_string();
        self.get_path(&["company", &id], RequestParams::new()).await
    }

    #[instrument(skip_all)]
    async fn genres(&self, kind: GenreKind, language: Option<&str>) -> Result<GenreList> {
        let params = RequestParams::new().param_opt(LANGUAGE, language);
        self.get_path(&["genre", kind.as_str(), "list"], params)
            .await
    }

    #[instrument(skip_all)]
    async fn trending(
        &self,
        media_type: TrendingMediaType,
        window: TimeWindow,
        params: &ListParams,
    ) -> Result<Paginated<MediaResult>> {
        self.get_path(
            &["trending", media_type.as_str(), window.as_str()],
            RequestParams::from(params),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn discover_movie(&self, params: &DiscoverParams) -> Result<Paginated<MovieSummary>> {
        self.get_path(
            &["discover", "movie"],
            params.to_request("primary_release_year"),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn discover_tv(&self, params: &DiscoverParams) -> Result<Paginated<TvSummary>> {
        self.get_path(
            &["discover", "tv"],
            params.to_request("first_air_date_year"),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn configuration(&self) -> Result<ApiConfiguration> {
        self.get_path(&["configuration"], RequestParams::new())
            .await
    }

    #[instrument(skip_all)]
    async fn create_guest_session(&self) -> Result<GuestSession> {
        self.get_path(
            &["authentication", "guest_session", "new"],
            RequestParams::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn rate_movie(
        &self,
        movie_id: u64,
        value: f64,
        session: &RatingSession,
    ) -> Result<StatusResponse> {
        self.post_rating("movie", movie_id, value, session).await
    }

    #[instrument(skip_all)]
    async fn rate_tv(
        &self,
        series_id: u64,
        value: f64,
        session: &RatingSession,
    ) -> Result<StatusResponse> {
        self.post_rating("tv", series_id, value, session).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::tmdb::params::ExternalSource;

    fn client_for(server: &MockServer) -> TmdbClient {
        let base_url = Url::parse(&format!("{}/3", server.uri())).unwrap();
        TmdbClient::builder()
            .base_url(base_url)
            .bearer_token("test-token")
            .build()
            .unwrap()
    }

    fn empty_page() -> serde_json::Value {
        json!({"page": 1, "results": [], "total_pages": 0, "total_results": 0})
    }

    #[tokio::test]
    async fn test_find_by_imdb_id() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/find/tt0137523"))
            .and(query_param("external_source", "imdb_id"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "movie_results": [{"id": 550, "title": "Fight Club"}],
                "person_results": [], "tv_results": [],
                "tv_episode_results": [], "tv_season_results": []
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let result = client
            .find("tt0137523", &FindParams::new(ExternalSource::Imdb))
            .await
            .unwrap();

        // Assert
        assert_eq!(result.movie_results[0].id, 550);
        assert_eq!(result.movie_results[0].title, "Fight Club");
    }

    #[tokio::test]
    async fn test_find_rejects_blank_id() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let result = client
            .find(" ", &FindParams::new(ExternalSource::Tvdb))
            .await;

        // Assert
        assert!(result.unwrap_err().to_string().contains("external_id"));
    }

    #[tokio::test]
    async fn test_find_encodes_id_segment() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/find/a%2Fb%20c"))
            .and(query_param("external_source", "freebase_id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let result = client
            .find("a/b c", &FindParams::new(ExternalSource::FreebaseId))
            .await
            .unwrap();

        // Assert
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_search_movie_sends_filters_and_defaults() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Suzume"))
            .and(query_param("year", "2022"))
            .and(query_param("page", "1"))
            .and(query_param("language", "en-US"))
            .and(query_param("region", "US"))
            .and(query_param("include_adult", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "results": [{"id": 916224, "title": "Suzume", "release_date": "2022-11-11"}],
                "total_pages": 1,
                "total_results": 1
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let page = client
            .search_movie(&SearchMovieParams::new("Suzume").year(2022))
            .await
            .unwrap();

        // Assert
        assert_eq!(page.total_results, 1);
        assert_eq!(page.results[0].id, 916_224);
    }

    #[tokio::test]
    async fn test_search_tv_overrides_language() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/tv"))
            .and(query_param("query", "SPY×FAMILY"))
            .and(query_param("language", "ja-JP"))
            .and(query_param("first_air_date_year", "2022"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let page = client
            .search_tv(
                &SearchTvParams::new("SPY×FAMILY")
                    .language("ja-JP")
                    .first_air_date_year(2022),
            )
            .await
            .unwrap();

        // Assert
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_generic_searches_hit_their_paths() {
        // Arrange
        let server = MockServer::start().await;
        for kind in ["person", "multi", "collection", "company", "keyword"] {
            Mock::given(method("GET"))
                .and(path(format!("/3/search/{kind}")))
                .and(query_param("query", "star"))
                .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
                .expect(1)
                .mount(&server)
                .await;
        }
        let client = client_for(&server);
        let params = SearchParams::new("star");

        // Act
        let person = client.search_person(&params).await.unwrap();
        let multi = client.search_multi(&params).await.unwrap();
        let collection = client.search_collection(&params).await.unwrap();
        let company = client.search_company(&params).await.unwrap();
        let keyword = client.search_keyword(&params).await.unwrap();

        // Assert
        assert_eq!(person.page, 1);
        assert_eq!(multi.page, 1);
        assert_eq!(collection.page, 1);
        assert_eq!(company.page, 1);
        assert_eq!(keyword.page, 1);
    }

    #[tokio::test]
    async fn test_movie_details_appends_resources() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("append_to_response", "credits,videos,keywords"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "title": "Fight Club",
                "credits": {"cast": [], "crew": []},
                "videos": {"results": []},
                "keywords": {"keywords": [{"id": 825, "name": "support group"}]}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let details = client
            .movie_details(
                550,
                &DetailsParams::new().append(["credits", "videos", "keywords"]),
            )
            .await
            .unwrap();

        // Assert
        assert!(details.credits.is_some());
        assert!(details.appended.contains_key("keywords"));
    }

    #[tokio::test]
    async fn test_movie_details_without_append_omits_key() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 550, "title": "Fight Club"})),
            )
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        client
            .movie_details(550, &DetailsParams::new())
            .await
            .unwrap();

        // Assert
        let requests = server.received_requests().await.unwrap();
        assert!(
            requests[0]
                .url
                .query_pairs()
                .all(|(k, _)| k != "append_to_response")
        );
    }

    #[tokio::test]
    async fn test_movie_related_lists() {
        // Arrange
        let server = MockServer::start().await;
        for suffix in ["now_playing", "550/recommendations", "550/similar"] {
            Mock::given(method("GET"))
                .and(path(format!("/3/movie/{suffix}")))
                .and(query_param("page", "2"))
                .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
                .expect(1)
                .mount(&server)
                .await;
        }
        let client = client_for(&server);
        let params = ListParams::new().page(2);

        // Act & Assert
        client
            .movie_list(MovieList::NowPlaying, &params)
            .await
            .unwrap();
        client.movie_recommendations(550, &params).await.unwrap();
        client.movie_similar(550, &params).await.unwrap();
    }

    #[tokio::test]
    async fn test_tv_details_season_and_episode() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/tv/1396"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1396, "name": "Breaking Bad"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/tv/1396/season/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3572, "season_number": 1, "name": "Season 1",
                "episodes": [{"id": 62085, "episode_number": 1, "season_number": 1, "name": "Pilot"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/tv/1396/season/1/episode/1"))
            .and(query_param("language", "es-ES"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 62085, "episode_number": 1, "season_number": 1, "name": "Piloto"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let details = client
            .tv_details(1396, &DetailsParams::new())
            .await
            .unwrap();
        let season = client
            .tv_season(1396, 1, &DetailsParams::new())
            .await
            .unwrap();
        let episode = client
            .tv_episode(1396, 1, 1, &DetailsParams::new().language("es-ES"))
            .await
            .unwrap();

        // Assert
        assert_eq!(details.name, "Breaking Bad");
        assert_eq!(season.episodes.len(), 1);
        assert_eq!(episode.name, "Piloto");
    }

    #[tokio::test]
    async fn test_tv_list() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/tv/airing_today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act & Assert
        client
            .tv_list(TvList::AiringToday, &ListParams::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_person_collection_and_company() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/person/287"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 287, "name": "Brad Pitt"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/collection/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10, "name": "Star Wars Collection",
                "parts": [{"id": 11, "title": "Star Wars"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/company/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "name": "Lucasfilm Ltd.", "origin_country": "US"
            })))
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let person = client
            .person_details(287, &DetailsParams::new())
            .await
            .unwrap();
        let collection = client
            .collection_details(10, &DetailsParams::new())
            .await
            .unwrap();
        let company = client.company_details(1).await.unwrap();

        // Assert
        assert_eq!(person.name, "Brad Pitt");
        assert_eq!(collection.parts[0].title, "Star Wars");
        assert_eq!(company.origin_country.as_deref(), Some("US"));
    }

    #[tokio::test]
    async fn test_genres_with_language() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/genre/tv/list"))
            .and(query_param("language", "ja"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "genres": [{"id": 16, "name": "アニメーション"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let list = client.genres(GenreKind::Tv, Some("ja")).await.unwrap();

        // Assert
        assert_eq!(list.genres[0].id, 16);
    }

    #[tokio::test]
    async fn test_trending_path() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/trending/person/week"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "results": [{"media_type": "person", "id": 287, "name": "Brad Pitt"}],
                "total_pages": 1,
                "total_results": 1
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let page = client
            .trending(
                TrendingMediaType::Person,
                TimeWindow::Week,
                &ListParams::new(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(page.results[0].media_type(), "person");
    }

    #[tokio::test]
    async fn test_discover_maps_year_per_media() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .and(query_param("primary_release_year", "1999"))
            .and(query_param("with_genres", "18,53"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/discover/tv"))
            .and(query_param("first_air_date_year", "1999"))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);
        let params = DiscoverParams::new().year(1999).with_genres([18, 53]);

        // Act & Assert
        client.discover_movie(&params).await.unwrap();
        client.discover_tv(&params).await.unwrap();
    }

    #[tokio::test]
    async fn test_configuration_and_guest_session() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/configuration"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "images": {
                    "base_url": "http://image.tmdb.org/t/p/",
                    "secure_base_url": "https://image.tmdb.org/t/p/",
                    "poster_sizes": ["w92", "w500", "original"]
                },
                "change_keys": ["adult", "air_date"]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/authentication/guest_session/new"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "guest_session_id": "1ce82ec1223641636ad4a60b07de3581",
                "expires_at": "2016-08-27 16:26:40 UTC"
            })))
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let config = client.configuration().await.unwrap();
        let session = client.create_guest_session().await.unwrap();

        // Assert
        assert_eq!(config.images.poster_sizes.len(), 3);
        assert!(session.success);
        assert_eq!(session.guest_session_id, "1ce82ec1223641636ad4a60b07de3581");
    }

    #[tokio::test]
    async fn test_rate_movie_posts_value() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/movie/550/rating"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"value": 8.5})))
            .and(query_param("guest_session_id", "g-1"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true, "status_code": 1, "status_message": "Success."
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let status = client
            .rate_movie(550, 8.5, &RatingSession::Guest(String::from("g-1")))
            .await
            .unwrap();

        // Assert
        assert_eq!(status.status_code, Some(1));
    }

    #[tokio::test]
    async fn test_rate_tv_with_user_session() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/tv/1396/rating"))
            .and(body_json(json!({"value": 10.0})))
            .and(query_param("session_id", "u-1"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true, "status_code": 12,
                "status_message": "The item/record was updated successfully."
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let status = client
            .rate_tv(1396, 10.0, &RatingSession::User(String::from("u-1")))
            .await
            .unwrap();

        // Assert
        assert_eq!(status.status_code, Some(12));
    }

    #[tokio::test]
    async fn test_rating_out_of_range_sends_nothing() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);
        let session = RatingSession::Guest(String::from("g-1"));

        // Act
        let too_low = client.rate_movie(550, 0.0, &session).await;
        let too_high = client.rate_tv(1396, 10.5, &session).await;
        let not_a_number = client.rate_movie(550, f64::NAN, &session).await;

        // Assert
        assert!(too_low.unwrap_err().to_string().contains("rating must be between"));
        assert!(too_high.is_err());
        assert!(not_a_number.is_err());
    }

    #[tokio::test]
    async fn test_rating_off_half_step_sends_nothing() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);
        let session = RatingSession::Guest(String::from("g-1"));

        // Act
        let result = client.rate_movie(550, 7.3, &session).await;

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("rating must be a multiple of 0.5, got 7.3")
        );
    }

    #[tokio::test]
    async fn test_rating_body_keeps_exact_value() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/tv/1396/rating"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true, "status_code": 1, "status_message": "Success."
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        client
            .rate_tv(1396, 7.5, &RatingSession::Guest(String::from("g-1")))
            .await
            .unwrap();

        // Assert
        let requests = server.received_requests().await.unwrap();
        assert_eq!(String::from_utf8_lossy(&requests[0].body), r#"{"value":7.5}"#);
    }

    #[tokio::test]
    async fn test_not_found_is_classified() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/999999999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false, "status_code": 34,
                "status_message": "The resource you requested could not be found."
            })))
            .mount(&server)
            .await;
        let client = client_for(&server);

        // Act
        let err = client
            .movie_details(999_999_999, &DetailsParams::new())
            .await
            .unwrap_err();

        // Assert
        let api_error = err.downcast_ref::<crate::tmdb::error::TmdbApiError>().unwrap();
        assert!(api_error.is_not_found());
        assert_eq!(api_error.status_code, Some(34));
    }
}
