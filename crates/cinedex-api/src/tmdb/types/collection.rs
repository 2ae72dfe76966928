//! Collection and company response types.

use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;

/// A collection as it appears in `search/collection`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionSummary {
    /// Collection ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `collection/{collection_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionDetails {
    /// Collection ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    #[serde(default)]
    pub parts: Vec<MovieSummary>,
}

/// A company as it appears in `search/company`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanySummary {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    pub origin_country: Option<String>,
}

/// Response from `company/{company_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanyDetails {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    pub origin_country: Option<String>,
    /// Parent company.
    pub parent_company: Option<Box<CompanySummary>>,
}
