//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;

use cinedex_api::tmdb::{
    ExternalSource, GenreKind, MovieList, TimeWindow, TrendingMediaType, TvList,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "cinedex", about, version)]
pub struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Default response language (e.g. "ja-JP"). Overrides config.
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Default region (e.g. "JP"). Overrides config.
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Include adult content (`--include-adult=false` to exclude). Overrides config.
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub include_adult: Option<bool>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// TMDB requests.
    #[command(flatten)]
    Tmdb(TmdbCommands),
    /// Show or edit the config file.
    Config(ConfigCommand),
    /// Print shell completions.
    Completions(CompletionsArgs),
}

/// Subcommands that talk to TMDB.
#[derive(Subcommand)]
pub enum TmdbCommands {
    /// Look up movies, series and people by external ID.
    Find(FindArgs),
    /// Search TMDB.
    Search(SearchCommand),
    /// Get movie details.
    Movie(DetailsArgs),
    /// Get a curated movie list.
    MovieList(MovieListArgs),
    /// Get recommended (or similar) movies for a movie.
    Recommendations(RecommendationsArgs),
    /// Get TV series details.
    Tv(DetailsArgs),
    /// Get a curated TV list.
    TvList(TvListArgs),
    /// Get TV season details.
    TvSeason(TvSeasonArgs),
    /// Get a single TV episode.
    TvEpisode(TvEpisodeArgs),
    /// Get person details.
    Person(DetailsArgs),
    /// Get a collection and its movies.
    Collection(DetailsArgs),
    /// Get company details.
    Company(IdArgs),
    /// List movie or TV genres.
    Genres(GenresArgs),
    /// Get trending movies, series or people.
    Trending(TrendingArgs),
    /// Discover movies or series by filter.
    Discover(DiscoverCommand),
    /// Show the image CDN configuration.
    Configuration,
    /// Create a guest session for ratings.
    GuestSession,
    /// Rate a movie or series.
    Rate(RateCommand),
    /// Send a request to any endpoint and print the JSON response.
    Raw(RawArgs),
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
pub struct FindArgs {
    /// External ID (e.g. "tt0137523").
    pub external_id: String,
    /// Namespace of the external ID.
    #[arg(long, default_value = "imdb_id")]
    pub source: ExternalSource,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchCommand {
    /// Search subcommand to run.
    #[command(subcommand)]
    pub command: SearchSubcommands,
}

/// Available search subcommands.
#[derive(Subcommand)]
pub enum SearchSubcommands {
    /// Search for movies.
    Movie(SearchMovieArgs),
    /// Search for TV series.
    Tv(SearchTvArgs),
    /// Search for people.
    Person(QueryArgs),
    /// Search movies, series and people at once.
    Multi(QueryArgs),
    /// Search for collections.
    Collection(QueryArgs),
    /// Search for companies.
    Company(QueryArgs),
    /// Search for keywords.
    Keyword(QueryArgs),
}

/// Arguments for the `search movie` subcommand.
#[derive(clap::Args)]
pub struct SearchMovieArgs {
    /// Search query (e.g. "すずめの戸締まり").
    pub query: String,
    /// Filter by any release year.
    #[arg(long)]
    pub year: Option<u32>,
    /// Filter by primary release year.
    #[arg(long)]
    pub primary_release_year: Option<u32>,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `search tv` subcommand.
#[derive(clap::Args)]
pub struct SearchTvArgs {
    /// Search query (e.g. "SPY×FAMILY").
    pub query: String,
    /// Filter by year.
    #[arg(long)]
    pub year: Option<u32>,
    /// Filter by first air date year.
    #[arg(long)]
    pub first_air_date_year: Option<u32>,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for query-only searches.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Search query.
    pub query: String,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for details subcommands.
#[derive(clap::Args)]
pub struct DetailsArgs {
    /// TMDB ID.
    pub id: u64,
    /// Comma-separated resources to append (e.g. "credits,videos").
    #[arg(long, value_delimiter = ',')]
    pub append: Vec<String>,
}

/// Arguments for subcommands taking only an ID.
#[derive(clap::Args)]
pub struct IdArgs {
    /// TMDB ID.
    pub id: u64,
}

/// Arguments for the `movie-list` subcommand.
#[derive(clap::Args)]
pub struct MovieListArgs {
    /// List name (popular, `top_rated`, `now_playing`, upcoming).
    pub list: MovieList,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `tv-list` subcommand.
#[derive(clap::Args)]
pub struct TvListArgs {
    /// List name (popular, `top_rated`, `airing_today`, `on_the_air`).
    pub list: TvList,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `recommendations` subcommand.
#[derive(clap::Args)]
pub struct RecommendationsArgs {
    /// TMDB movie ID.
    pub id: u64,
    /// Fetch similar movies instead of recommendations.
    #[arg(long)]
    pub similar: bool,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `tv-season` subcommand.
#[derive(clap::Args)]
pub struct TvSeasonArgs {
    /// TMDB series ID.
    pub id: u64,
    /// Season number.
    pub season: u32,
    /// Comma-separated resources to append.
    #[arg(long, value_delimiter = ',')]
    pub append: Vec<String>,
}

/// Arguments for the `tv-episode` subcommand.
#[derive(clap::Args)]
pub struct TvEpisodeArgs {
    /// TMDB series ID.
    pub id: u64,
    /// Season number.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
    /// Comma-separated resources to append.
    #[arg(long, value_delimiter = ',')]
    pub append: Vec<String>,
}

/// Arguments for the `genres` subcommand.
#[derive(clap::Args)]
pub struct GenresArgs {
    /// Genre kind (movie, tv).
    pub kind: GenreKind,
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
pub struct TrendingArgs {
    /// Media type (all, movie, tv, person).
    #[arg(default_value = "all")]
    pub media_type: TrendingMediaType,
    /// Time window (day, week).
    #[arg(default_value = "day")]
    pub window: TimeWindow,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
pub struct DiscoverCommand {
    /// Discover subcommand to run.
    #[command(subcommand)]
    pub command: DiscoverSubcommands,
}

/// Available discover subcommands.
#[derive(Subcommand)]
pub enum DiscoverSubcommands {
    /// Discover movies.
    Movie(DiscoverArgs),
    /// Discover TV series.
    Tv(DiscoverArgs),
}

/// Arguments for the `discover movie` and `discover tv` subcommands.
#[derive(clap::Args)]
pub struct DiscoverArgs {
    /// Sort order (e.g. "popularity.desc").
    #[arg(long)]
    pub sort_by: Option<String>,
    /// Comma-separated genre IDs.
    #[arg(long, value_delimiter = ',')]
    pub genres: Vec<u32>,
    /// Original language (ISO 639-1).
    #[arg(long)]
    pub original_language: Option<String>,
    /// Release year (movies) or first air year (TV).
    #[arg(long)]
    pub year: Option<u32>,
    /// Extra filter as KEY=VALUE (repeatable).
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub filters: Vec<(String, String)>,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the `rate` subcommand.
#[derive(clap::Args)]
pub struct RateCommand {
    /// Rate subcommand to run.
    #[command(subcommand)]
    pub command: RateSubcommands,
}

/// Available rate subcommands.
#[derive(Subcommand)]
pub enum RateSubcommands {
    /// Rate a movie.
    Movie(RateArgs),
    /// Rate a TV series.
    Tv(RateArgs),
}

/// Arguments for the `rate movie` and `rate tv` subcommands.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("auth").required(true).args(["guest_session", "session"])))]
pub struct RateArgs {
    /// TMDB ID.
    pub id: u64,
    /// Rating (0.5 to 10.0).
    pub value: f64,
    /// Guest session ID (see `guest-session`).
    #[arg(long)]
    pub guest_session: Option<String>,
    /// User session ID.
    #[arg(long)]
    pub session: Option<String>,
}

/// Arguments for the `raw` subcommand.
#[derive(clap::Args)]
pub struct RawArgs {
    /// Endpoint path relative to the base URL (e.g. "movie/550/keywords").
    pub path: String,
    /// Query parameter as KEY=VALUE (repeatable).
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
    /// Suppress a default parameter (language, region, `include_adult`).
    #[arg(long)]
    pub unset: Vec<String>,
    /// Send a POST with this JSON body instead of a GET.
    #[arg(long, value_name = "JSON")]
    pub post: Option<String>,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
pub struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the config file values.
    Show,
    /// Set a `[tmdb]` key (empty value clears it).
    Set(ConfigSetArgs),
}

/// Arguments for the `config set` subcommand.
#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key (`base_url`, language, region, `include_adult`, `timeout_secs`).
    pub key: String,
    /// New value.
    pub value: String,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell.
    pub shell: Shell,
}

/// Parses `KEY=VALUE`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
