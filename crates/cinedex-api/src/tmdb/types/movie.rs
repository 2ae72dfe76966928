//! Movie response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Credits, ExternalIds, Genre, ProductionCompany, ProductionCountry, SpokenLanguage, Videos,
};

/// A movie as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Release date (YYYY-MM-DD, may be empty).
    pub release_date: Option<String>,
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
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Collection reference inside movie details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionRef {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `movie/{movie_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Release status (e.g. "Released").
    pub status: Option<String>,
    /// Budget in USD.
    #[serde(default)]
    pub budget: u64,
    /// Revenue in USD.
    #[serde(default)]
    pub revenue: u64,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Collection this movie belongs to.
    pub belongs_to_collection: Option<CollectionRef>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
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
    /// Fields not modelled above, including other appended resources
    /// keyed by their `append_to_response` name.
    #[serde(flatten)]
    pub appended: BTreeMap<String, Value>,
}
