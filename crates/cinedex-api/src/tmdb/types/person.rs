//! Person response types and mixed-media results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::ExternalIds;
use super::movie::MovieSummary;
use super::tv::TvSummary;

/// A person as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default)]
    pub gender: u8,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Notable credits.
    #[serde(default)]
    pub known_for: Vec<MediaResult>,
}

/// Response from `person/{person_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Other names.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Biography.
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    pub birthday: Option<String>,
    /// Date of death (YYYY-MM-DD).
    pub deathday: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default)]
    pub gender: u8,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Fields not modelled above, including other appended resources.
    #[serde(flatten)]
    pub appended: BTreeMap<String, Value>,
}

/// A result from `search/multi`, `trending/*` or a person's `known_for`.
///
/// Tagged by the `media_type` field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaResult {
    /// A movie.
    Movie(MovieSummary),
    /// A TV series.
    Tv(TvSummary),
    /// A person.
    Person(PersonSummary),
    /// A media type this client does not model.
    #[serde(other)]
    Other,
}

impl MediaResult {
    /// TMDB ID of the result, if known.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Movie(m) => Some(m.id),
            Self::Tv(t) => Some(t.id),
            Self::Person(p) => Some(p.id),
            Self::Other => None,
        }
    }

    /// Display title: movie title, series name or person name.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Movie(m) => Some(&m.title),
            Self::Tv(t) => Some(&t.name),
            Self::Person(p) => Some(&p.name),
            Self::Other => None,
        }
    }

    /// The `media_type` tag.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Movie(_) => "movie",
            Self::Tv(_) => "tv",
            Self::Person(_) => "person",
            Self::Other => "other",
        }
    }
}
