//! Tab-separated output of TMDB responses as `tracing::info!` lines.

use std::fmt::Display;
use std::path::Path;

use serde_json::Value;

use cinedex_api::tmdb::{
    ApiConfiguration, CollectionDetails, CollectionSummary, CompanyDetails, CompanySummary,
    Episode, FindResponse, GenreList, GuestSession, Keyword, MediaResult, MovieDetails,
    MovieSummary, Paginated, PersonDetails, PersonSummary, SeasonDetails, StatusResponse,
    TvDetails, TvSummary,
};

use crate::config::TmdbConfig;

/// Placeholder for missing values.
const NONE: &str = "-";

fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from(NONE), |v| v.to_string())
}

fn joined<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return String::from(NONE);
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Logs a header, one line per result and a page footer.
fn render_page<T>(page: &Paginated<T>, header: &str, row: impl Fn(&T) -> String) {
    tracing::info!("{}", header);
    for item in &page.results {
        tracing::info!("{}", row(item));
    }
    tracing::info!(
        "Page {}/{} ({} results)",
        page.page,
        page.total_pages,
        page.total_results
    );
}

fn movie_row(m: &MovieSummary) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.1}",
        m.id,
        m.title,
        m.original_language,
        opt(m.release_date.as_deref()),
        m.vote_average
    )
}

fn tv_row(t: &TvSummary) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        t.id,
        t.name,
        t.original_language,
        joined(&t.origin_country),
        opt(t.first_air_date.as_deref()),
    )
}

fn person_row(p: &PersonSummary) -> String {
    let known_for: Vec<&str> = p.known_for.iter().filter_map(MediaResult::title).collect();
    format!(
        "{}\t{}\t{}\t{}",
        p.id,
        p.name,
        opt(p.known_for_department.as_deref()),
        joined(&known_for),
    )
}

/// Renders a page of movies.
pub fn render_movies(page: &Paginated<MovieSummary>) {
    render_page(page, "ID\tTitle\tOrigLang\tReleaseDate\tVote", movie_row);
}

/// Renders a page of TV series.
pub fn render_tv_shows(page: &Paginated<TvSummary>) {
    render_page(page, "ID\tName\tOrigLang\tCountry\tFirstAirDate", tv_row);
}

/// Renders a page of people.
pub fn render_people(page: &Paginated<PersonSummary>) {
    render_page(page, "ID\tName\tDepartment\tKnownFor", person_row);
}

/// Renders a page of mixed movie / TV / person results.
pub fn render_media(page: &Paginated<MediaResult>) {
    render_page(page, "Type\tID\tTitle", |r| {
        format!("{}\t{}\t{}", r.media_type(), opt(r.id()), opt(r.title()))
    });
}

/// Renders a page of collections.
pub fn render_collections(page: &Paginated<CollectionSummary>) {
    render_page(page, "ID\tName", |c| format!("{}\t{}", c.id, c.name));
}

/// Renders a page of companies.
pub fn render_companies(page: &Paginated<CompanySummary>) {
    render_page(page, "ID\tName\tCountry", |c| {
        format!("{}\t{}\t{}", c.id, c.name, opt(c.origin_country.as_deref()))
    });
}

/// Renders a page of keywords.
pub fn render_keywords(page: &Paginated<Keyword>) {
    render_page(page, "ID\tName", |k| format!("{}\t{}", k.id, k.name));
}

/// Renders `find` results grouped by kind.
pub fn render_find(response: &FindResponse) {
    for m in &response.movie_results {
        tracing::info!("movie\t{}", movie_row(m));
    }
    for t in &response.tv_results {
        tracing::info!("tv\t{}", tv_row(t));
    }
    for p in &response.person_results {
        tracing::info!("person\t{}", person_row(p));
    }
    for s in &response.tv_season_results {
        tracing::info!(
            "tv_season\t{}\tshow={}\tS{:02}\t{}",
            s.id,
            opt(s.show_id),
            s.season_number,
            s.name
        );
    }
    for e in &response.tv_episode_results {
        tracing::info!(
            "tv_episode\t{}\tshow={}\tS{:02}E{:02}\t{}",
            e.id,
            opt(e.show_id),
            e.season_number,
            e.episode_number,
            e.name
        );
    }
    tracing::info!("Total: {} results", response.len());
}

/// Renders movie details.
pub fn render_movie_details(d: &MovieDetails) {
    tracing::info!("ID:\t\t{}", d.id);
    tracing::info!("Title:\t\t{}", d.title);
    tracing::info!("Original:\t{} ({})", d.original_title, d.original_language);
    tracing::info!("Released:\t{}", opt(d.release_date.as_deref()));
    tracing::info!("Runtime:\t{}", opt(d.runtime.map(|r| format!("{r} min"))));
    let genres: Vec<&str> = d.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres:\t\t{}", joined(&genres));
    tracing::info!("IMDb:\t\t{}", opt(d.imdb_id.as_deref()));
    if let Some(ref collection) = d.belongs_to_collection {
        tracing::info!("Collection:\t{} ({})", collection.name, collection.id);
    }
    tracing::info!("Vote:\t\t{:.1} ({} votes)", d.vote_average, d.vote_count);
    if let Some(ref credits) = d.credits {
        let cast: Vec<&str> = credits.cast.iter().take(5).map(|c| c.name.as_str()).collect();
        tracing::info!("Cast:\t\t{}", joined(&cast));
    }
    if !d.appended.is_empty() {
        let keys: Vec<&str> = d.appended.keys().map(String::as_str).collect();
        tracing::info!("Appended:\t{}", keys.join(","));
    }
}

/// Renders TV series details including the season list.
pub fn render_tv_details(d: &TvDetails) {
    tracing::info!("ID:\t\t{}", d.id);
    tracing::info!("Name:\t\t{}", d.name);
    tracing::info!("Original:\t{} ({})", d.original_name, d.original_language);
    tracing::info!("Status:\t\t{}", opt(d.status.as_deref()));
    tracing::info!(
        "Seasons:\t{} ({} episodes)",
        d.number_of_seasons,
        d.number_of_episodes
    );
    tracing::info!("Season\tEpisodes\tAirDate\t\tName");
    for s in &d.seasons {
        tracing::info!(
            "{}\t{}\t\t{}\t{}",
            s.season_number,
            s.episode_count,
            opt(s.air_date.as_deref()),
            s.name
        );
    }
}

/// Renders a season and its episodes.
pub fn render_season(d: &SeasonDetails) {
    tracing::info!(
        "Season {}: {}",
        d.season_number,
        d.name.as_deref().unwrap_or(NONE)
    );
    tracing::info!("Ep\tAirDate\t\tRuntime\tName");
    for e in &d.episodes {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            e.episode_number,
            opt(e.air_date.as_deref()),
            opt(e.runtime),
            e.name
        );
    }
    tracing::info!("Total: {} episodes", d.episodes.len());
}

/// Renders a single episode.
pub fn render_episode(e: &Episode) {
    tracing::info!("S{:02}E{:02}\t{}", e.season_number, e.episode_number, e.name);
    tracing::info!("Aired:\t\t{}", opt(e.air_date.as_deref()));
    tracing::info!("Runtime:\t{}", opt(e.runtime));
    tracing::info!("Guest stars:\t{}", e.guest_stars.len());
}

/// Renders person details.
pub fn render_person(d: &PersonDetails) {
    tracing::info!("ID:\t\t{}", d.id);
    tracing::info!("Name:\t\t{}", d.name);
    tracing::info!("Department:\t{}", opt(d.known_for_department.as_deref()));
    tracing::info!("Born:\t\t{}", opt(d.birthday.as_deref()));
    if let Some(ref deathday) = d.deathday {
        tracing::info!("Died:\t\t{}", deathday);
    }
    tracing::info!("Birthplace:\t{}", opt(d.place_of_birth.as_deref()));
}

/// Renders a collection and its parts.
pub fn render_collection_details(d: &CollectionDetails) {
    tracing::info!("{} ({})", d.name, d.id);
    tracing::info!("ID\tTitle\tOrigLang\tReleaseDate\tVote");
    for m in &d.parts {
        tracing::info!("{}", movie_row(m));
    }
}

/// Renders company details.
pub fn render_company(d: &CompanyDetails) {
    tracing::info!("{} ({})", d.name, d.id);
    tracing::info!("Country:\t{}", opt(d.origin_country.as_deref()));
    tracing::info!("HQ:\t\t{}", opt(d.headquarters.as_deref()));
    if let Some(ref parent) = d.parent_company {
        tracing::info!("Parent:\t\t{} ({})", parent.name, parent.id);
    }
}

/// Renders a genre list.
pub fn render_genres(list: &GenreList) {
    tracing::info!("ID\tName");
    for g in &list.genres {
        tracing::info!("{}\t{}", g.id, g.name);
    }
}

/// Renders the image CDN configuration.
pub fn render_configuration(config: &ApiConfiguration) {
    let images = &config.images;
    tracing::info!("Image base:\t{}", images.secure_base_url);
    tracing::info!("Poster sizes:\t{}", joined(&images.poster_sizes));
    tracing::info!("Backdrop sizes:\t{}", joined(&images.backdrop_sizes));
    tracing::info!("Profile sizes:\t{}", joined(&images.profile_sizes));
    tracing::info!("Still sizes:\t{}", joined(&images.still_sizes));
    tracing::info!("Logo sizes:\t{}", joined(&images.logo_sizes));
}

/// Renders a new guest session.
pub fn render_guest_session(session: &GuestSession) {
    tracing::info!("Guest session:\t{}", session.guest_session_id);
    tracing::info!("Expires:\t{}", opt(session.expires_at.as_deref()));
}

/// Renders a write endpoint status.
pub fn render_status(status: &StatusResponse) {
    tracing::info!(
        "Status {}: {}",
        opt(status.status_code),
        status.status_message.as_deref().unwrap_or(NONE)
    );
}

/// Renders a raw JSON response, pretty-printed.
pub fn render_json(value: &Value) {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    for line in text.lines() {
        tracing::info!("{}", line);
    }
}

/// Renders the config file values.
pub fn render_config(path: &Path, config: &TmdbConfig) {
    tracing::info!("# {}", path.display());
    tracing::info!("base_url = {}", opt(config.base_url.as_deref()));
    tracing::info!("language = {}", opt(config.language.as_deref()));
    tracing::info!("region = {}", opt(config.region.as_deref()));
    tracing::info!("include_adult = {}", opt(config.include_adult));
    tracing::info!("timeout_secs = {}", opt(config.timeout_secs));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::path::PathBuf;

    use serde_json::json;
    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    fn page_of<T: serde::de::DeserializeOwned>(results: Value) -> Paginated<T> {
        serde_json::from_value(json!({
            "page": 1,
            "results": results,
            "total_pages": 1,
            "total_results": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_render_movies() {
        // Arrange
        let page: Paginated<MovieSummary> = page_of(json!([{
            "id": 916_224, "title": "Suzume", "original_language": "ja",
            "release_date": "2022-11-11", "vote_average": 7.9
        }]));
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("ID\tTitle\tOrigLang\tReleaseDate\tVote")))
            .event(expect::event().with_fields(expect::msg("916224\tSuzume\tja\t2022-11-11\t7.9")))
            .event(expect::event().with_fields(expect::msg("Page 1/1 (1 results)")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_movies(&page));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_tv_shows_with_missing_date() {
        // Arrange
        let page: Paginated<TvSummary> = page_of(json!([{
            "id": 120_089, "name": "SPY×FAMILY", "original_language": "ja",
            "origin_country": ["JP"]
        }]));
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event())
            .event(expect::event().with_fields(expect::msg("120089\tSPY×FAMILY\tja\tJP\t-")))
            .event(expect::event())
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_tv_shows(&page));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_media_marks_unknown_type() {
        // Arrange
        let page: Paginated<MediaResult> = page_of(json!([
            {"media_type": "collection", "id": 10, "name": "Star Wars Collection"}
        ]));
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event())
            .event(expect::event().with_fields(expect::msg("other\t-\t-")))
            .event(expect::event())
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_media(&page));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_find_episode() {
        // Arrange
        let response: FindResponse = serde_json::from_value(json!({
            "tv_episode_results": [{
                "id": 62085, "name": "Pilot", "episode_number": 1,
                "season_number": 1, "show_id": 1396
            }]
        }))
        .unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("tv_episode\t62085\tshow=1396\tS01E01\tPilot")))
            .event(expect::event().with_fields(expect::msg("Total: 1 results")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_find(&response));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_status() {
        // Arrange
        let status = StatusResponse {
            success: Some(true),
            status_code: Some(1),
            status_message: Some(String::from("Success.")),
        };
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Status 1: Success.")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_status(&status));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_config_shows_unset_values() {
        // Arrange
        let config = TmdbConfig {
            language: Some(String::from("ja-JP")),
            ..TmdbConfig::default()
        };
        let path = PathBuf::from("/tmp/cinedex/config.toml");
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("# /tmp/cinedex/config.toml")))
            .event(expect::event().with_fields(expect::msg("base_url = -")))
            .event(expect::event().with_fields(expect::msg("language = ja-JP")))
            .event(expect::event().with_fields(expect::msg("region = -")))
            .event(expect::event().with_fields(expect::msg("include_adult = -")))
            .event(expect::event().with_fields(expect::msg("timeout_secs = -")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_config(&path, &config));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_render_json_pretty() {
        // Arrange
        let value = json!({"id": 1});
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("{")))
            .event(expect::event().with_fields(expect::msg("  \"id\": 1")))
            .event(expect::event().with_fields(expect::msg("}")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || render_json(&value));

        // Assert
        handle.assert_finished();
    }
}
