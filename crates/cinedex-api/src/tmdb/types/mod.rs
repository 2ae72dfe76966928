//! TMDB API response types.

mod collection;
mod common;
mod configuration;
mod find;
mod movie;
mod person;
mod tv;

pub use collection::{CollectionDetails, CollectionSummary, CompanyDetails, CompanySummary};
pub use common::{
    CastMember, Credits, CrewMember, DateWindow, ExternalIds, Genre, GenreList, Keyword,
    Paginated, ProductionCompany, ProductionCountry, SpokenLanguage, StatusResponse, Video,
    Videos,
};
pub use configuration::{ApiConfiguration, GuestSession, ImagesConfiguration};
pub use find::FindResponse;
pub use movie::{CollectionRef, MovieDetails, MovieSummary};
pub use person::{MediaResult, PersonDetails, PersonSummary};
pub use tv::{Creator, Episode, Network, SeasonDetails, SeasonSummary, TvDetails, TvSummary};
