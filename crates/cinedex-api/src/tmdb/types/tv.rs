//! TV series, season and episode response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    CastMember, Credits, CrewMember, ExternalIds, Genre, ProductionCompany, Videos,
};

/// A TV series as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Creator credit on a series.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Broadcasting network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Network {
    /// Network ID.
    pub id: u64,
    /// Network name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default)]
    pub origin_country: String,
}

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Most recently aired episode.
    pub last_episode_to_air: Option<Episode>,
    /// Next scheduled episode.
    pub next_episode_to_air: Option<Episode>,
    /// Status (e.g. "Returning Series", "Ended").
    pub status: Option<String>,
    /// Series type (e.g. "Scripted").
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Creators.
    #[serde(default)]
    pub created_by: Vec<Creator>,
    /// Networks.
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Whether the show is still in production.
    #[serde(default)]
    pub in_production: bool,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Appended `videos`.
    pub videos: Option<Videos>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Fields not modelled above, including other appended resources.
    #[serde(flatten)]
    pub appended: BTreeMap<String, Value>,
}

/// Season summary within TV details and `find` results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    #[serde(default)]
    pub episode_count: u32,
    /// Air date of this season.
    pub air_date: Option<String>,
    /// Season name.
    #[serde(default)]
    pub name: String,
    /// Season overview.
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Parent series ID (set in `find` results).
    pub show_id: Option<u64>,
}

/// Response from `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonDetails {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id", default)]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Season overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Fields not modelled above, including other appended resources.
    #[serde(flatten)]
    pub appended: BTreeMap<String, Value>,
}

/// A single episode, as listed in a season or returned by `tv/{id}/season/{n}/episode/{m}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Episode name.
    #[serde(default)]
    pub name: String,
    /// Episode overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Parent show ID.
    pub show_id: Option<u64>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Episode type (e.g. "standard", "finale").
    pub episode_type: Option<String>,
    /// Production code.
    pub production_code: Option<String>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Crew for this episode.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    /// Guest stars for this episode.
    #[serde(default)]
    pub guest_stars: Vec<CastMember>,
}
