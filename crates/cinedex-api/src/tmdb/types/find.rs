//! `find` response type.

use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;
use super::person::PersonSummary;
use super::tv::{Episode, SeasonSummary, TvSummary};

/// Response from `find/{external_id}`.
///
/// At most one of the lists is normally non-empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FindResponse {
    /// Matching movies.
    #[serde(default)]
    pub movie_results: Vec<MovieSummary>,
    /// Matching people.
    #[serde(default)]
    pub person_results: Vec<PersonSummary>,
    /// Matching TV series.
    #[serde(default)]
    pub tv_results: Vec<TvSummary>,
    /// Matching TV episodes.
    #[serde(default)]
    pub tv_episode_results: Vec<Episode>,
    /// Matching TV seasons.
    #[serde(default)]
    pub tv_season_results: Vec<SeasonSummary>,
}

impl FindResponse {
    /// Total number of matches across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movie_results
            .len()
            .saturating_add(self.person_results.len())
            .saturating_add(self.tv_results.len())
            .saturating_add(self.tv_episode_results.len())
            .saturating_add(self.tv_season_results.len())
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
