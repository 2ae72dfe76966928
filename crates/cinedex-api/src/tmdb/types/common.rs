//! Shapes shared across endpoints.

use serde::{Deserialize, Serialize};

/// A page of results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paginated<T> {
    /// Current page number.
    pub page: u32,
    /// Results on this page.
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
    /// Date window, only on `now_playing` and `upcoming`.
    #[serde(default)]
    pub dates: Option<DateWindow>,
}

/// Date window attached to release lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DateWindow {
    /// Latest date (YYYY-MM-DD).
    pub maximum: String,
    /// Earliest date (YYYY-MM-DD).
    pub minimum: String,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Response from `genre/{movie,tv}/list`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenreList {
    /// All genres.
    pub genres: Vec<Genre>,
}

/// Production company reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default)]
    pub origin_country: String,
}

/// Production country.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpokenLanguage {
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// English name.
    #[serde(default)]
    pub english_name: String,
    /// Native name.
    #[serde(default)]
    pub name: String,
}

/// Cast and crew (`credits` or appended `credits`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Credits {
    /// Owning resource ID (absent when appended).
    pub id: Option<u64>,
    /// Cast members.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew members.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// A cast credit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CastMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: Option<String>,
    /// Billing order.
    pub order: Option<u32>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A crew credit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Department (e.g. "Directing").
    pub department: Option<String>,
    /// Job (e.g. "Director").
    pub job: Option<String>,
    /// Credit ID.
    pub credit_id: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Video list (`videos` or appended `videos`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Videos {
    /// Videos.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A trailer, teaser or clip.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Site-specific key (e.g. YouTube video ID).
    pub key: String,
    /// Title.
    pub name: String,
    /// Hosting site (e.g. "YouTube").
    pub site: String,
    /// Kind (e.g. "Trailer").
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether TMDB marks it official.
    #[serde(default)]
    pub official: bool,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Publication timestamp.
    pub published_at: Option<String>,
}

/// External identifiers (`external_ids` or appended `external_ids`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExternalIds {
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Wikidata ID.
    pub wikidata_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// TVRage ID.
    pub tvrage_id: Option<u64>,
    /// Freebase MID.
    pub freebase_mid: Option<String>,
    /// Freebase ID.
    pub freebase_id: Option<String>,
    /// Facebook handle.
    pub facebook_id: Option<String>,
    /// Instagram handle.
    pub instagram_id: Option<String>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
}

/// Keyword entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// Status envelope returned by write endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusResponse {
    /// Whether the call succeeded.
    #[serde(default)]
    pub success: Option<bool>,
    /// TMDB status code (1 = created, 12 = updated, 13 = deleted).
    pub status_code: Option<u32>,
    /// Status message.
    pub status_message: Option<String>,
}
