//! Subcommand runners.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use clap_complete::Shell;
use serde_json::Value;
use tracing::instrument;

use cinedex_api::tmdb::{
    DetailsParams, DiscoverParams, FindParams, ListParams, LocalTmdbApi, RatingSession,
    RequestParams, SearchMovieParams, SearchParams, SearchTvParams, TmdbClient,
};

use crate::cli::{
    Cli, ConfigSubcommands, DiscoverArgs, DiscoverSubcommands, RateArgs, RateSubcommands,
    RawArgs, SearchSubcommands, TmdbCommands,
};
use crate::config::{
    AppConfig, CliOverrides, build_client, credentials_from_env, resolve_config_path,
};
use crate::render;

/// Builds a `TmdbClient` from environment credentials, the config file and
/// the global CLI flags.
///
/// # Errors
///
/// Returns an error if no credentials are set, the config cannot be
/// loaded, or the client fails to build.
#[instrument(skip_all)]
pub fn build_tmdb_client(dir: Option<&Path>, overrides: &CliOverrides) -> Result<TmdbClient> {
    let credentials = credentials_from_env()?;
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    build_client(&config.tmdb, overrides, credentials)
}

fn details_params(append: Vec<String>) -> DetailsParams {
    DetailsParams::new().append(append)
}

/// Runs a TMDB subcommand and renders its response.
///
/// # Errors
///
/// Returns an error if the request fails.
#[allow(clippy::too_many_lines)]
#[instrument(skip_all)]
pub async fn run_tmdb(client: &TmdbClient, command: TmdbCommands) -> Result<()> {
    match command {
        TmdbCommands::Find(args) => {
            let response = client
                .find(&args.external_id, &FindParams::new(args.source))
                .await
                .context("TMDB find request failed")?;
            render::render_find(&response);
        }
        TmdbCommands::Search(cmd) => run_search(client, cmd.command).await?,
        TmdbCommands::Movie(args) => {
            let details = client
                .movie_details(args.id, &details_params(args.append))
                .await
                .context("TMDB movie request failed")?;
            render::render_movie_details(&details);
        }
        TmdbCommands::MovieList(args) => {
            let page = client
                .movie_list(args.list, &ListParams::new().page(args.page))
                .await
                .with_context(|| format!("TMDB movie/{} request failed", args.list))?;
            render::render_movies(&page);
        }
        TmdbCommands::Recommendations(args) => {
            let params = ListParams::new().page(args.page);
            let result = if args.similar {
                client.movie_similar(args.id, &params).await
            } else {
                client.movie_recommendations(args.id, &params).await
            };
            let page = result.context("TMDB recommendations request failed")?;
            render::render_movies(&page);
        }
        TmdbCommands::Tv(args) => {
            let details = client
                .tv_details(args.id, &details_params(args.append))
                .await
                .context("TMDB tv request failed")?;
            render::render_tv_details(&details);
        }
        TmdbCommands::TvList(args) => {
            let page = client
                .tv_list(args.list, &ListParams::new().page(args.page))
                .await
                .with_context(|| format!("TMDB tv/{} request failed", args.list))?;
            render::render_tv_shows(&page);
        }
        TmdbCommands::TvSeason(args) => {
            let season = client
                .tv_season(args.id, args.season, &details_params(args.append))
                .await
                .context("TMDB tv season request failed")?;
            render::render_season(&season);
        }
        TmdbCommands::TvEpisode(args) => {
            let episode = client
                .tv_episode(
                    args.id,
                    args.season,
                    args.episode,
                    &details_params(args.append),
                )
                .await
                .context("TMDB tv episode request failed")?;
            render::render_episode(&episode);
        }
        TmdbCommands::Person(args) => {
            let person = client
                .person_details(args.id, &details_params(args.append))
                .await
                .context("TMDB person request failed")?;
            render::render_person(&person);
        }
        TmdbCommands::Collection(args) => {
            let collection = client
                .collection_details(args.id, &details_params(args.append))
                .await
                .context("TMDB collection request failed")?;
            render::render_collection_details(&collection);
        }
        TmdbCommands::Company(args) => {
            let company = client
                .company_details(args.id)
                .await
                .context("TMDB company request failed")?;
            render::render_company(&company);
        }
        TmdbCommands::Genres(args) => {
            let genres = client
                .genres(args.kind, None)
                .await
                .context("TMDB genre request failed")?;
            render::render_genres(&genres);
        }
        TmdbCommands::Trending(args) => {
            let page = client
                .trending(
                    args.media_type,
                    args.window,
                    &ListParams::new().page(args.page),
                )
                .await
                .context("TMDB trending request failed")?;
            render::render_media(&page);
        }
        TmdbCommands::Discover(cmd) => run_discover(client, cmd.command).await?,
        TmdbCommands::Configuration => {
            let config = client
                .configuration()
                .await
                .context("TMDB configuration request failed")?;
            render::render_configuration(&config);
        }
        TmdbCommands::GuestSession => {
            let session = client
                .create_guest_session()
                .await
                .context("TMDB guest session request failed")?;
            render::render_guest_session(&session);
        }
        TmdbCommands::Rate(cmd) => run_rate(client, cmd.command).await?,
        TmdbCommands::Raw(args) => run_raw(client, args).await?,
    }
    Ok(())
}

async fn run_search(client: &TmdbClient, command: SearchSubcommands) -> Result<()> {
    match command {
        SearchSubcommands::Movie(args) => {
            let mut params = SearchMovieParams::new(&args.query).page(args.page);
            if let Some(year) = args.year {
                params = params.year(year);
            }
            if let Some(year) = args.primary_release_year {
                params = params.primary_release_year(year);
            }
            let page = client
                .search_movie(&params)
                .await
                .context("TMDB search/movie request failed")?;
            render::render_movies(&page);
        }
        SearchSubcommands::Tv(args) => {
            let mut params = SearchTvParams::new(&args.query).page(args.page);
            if let Some(year) = args.year {
                params = params.year(year);
            }
            if let Some(year) = args.first_air_date_year {
                params = params.first_air_date_year(year);
            }
            let page = client
                .search_tv(&params)
                .await
                .context("TMDB search/tv request failed")?;
            render::render_tv_shows(&page);
        }
        SearchSubcommands::Person(args) => {
            let params = SearchParams::new(&args.query).page(args.page);
            let page = client
                .search_person(&params)
                .await
                .context("TMDB search/person request failed")?;
            render::render_people(&page);
        }
        SearchSubcommands::Multi(args) => {
            let params = SearchParams::new(&args.query).page(args.page);
            let page = client
                .search_multi(&params)
                .await
                .context("TMDB search/multi request failed")?;
            render::render_media(&page);
        }
        SearchSubcommands::Collection(args) => {
            let params = SearchParams::new(&args.query).page(args.page);
            let page = client
                .search_collection(&params)
                .await
                .context("TMDB search/collection request failed")?;
            render::render_collections(&page);
        }
        SearchSubcommands::Company(args) => {
            let params = SearchParams::new(&args.query).page(args.page);
            let page = client
                .search_company(&params)
                .await
                .context("TMDB search/company request failed")?;
            render::render_companies(&page);
        }
        SearchSubcommands::Keyword(args) => {
            let params = SearchParams::new(&args.query).page(args.page);
            let page = client
                .search_keyword(&params)
                .await
                .context("TMDB search/keyword request failed")?;
            render::render_keywords(&page);
        }
    }
    Ok(())
}

fn discover_params(args: DiscoverArgs) -> DiscoverParams {
    let mut params = DiscoverParams::new()
        .page(args.page)
        .with_genres(args.genres);
    if let Some(sort_by) = args.sort_by {
        params = params.sort_by(sort_by);
    }
    if let Some(language) = args.original_language {
        params = params.with_original_language(language);
    }
    if let Some(year) = args.year {
        params = params.year(year);
    }
    args.filters
        .into_iter()
        .fold(params, |p, (key, value)| p.filter(key, value))
}

async fn run_discover(client: &TmdbClient, command: DiscoverSubcommands) -> Result<()> {
    match command {
        DiscoverSubcommands::Movie(args) => {
            let page = client
                .discover_movie(&discover_params(args))
                .await
                .context("TMDB discover/movie request failed")?;
            render::render_movies(&page);
        }
        DiscoverSubcommands::Tv(args) => {
            let page = client
                .discover_tv(&discover_params(args))
                .await
                .context("TMDB discover/tv request failed")?;
            render::render_tv_shows(&page);
        }
    }
    Ok(())
}

fn rating_session(args: &RateArgs) -> Result<RatingSession> {
    match (&args.guest_session, &args.session) {
        (Some(guest), _) => Ok(RatingSession::Guest(guest.clone())),
        (None, Some(session)) => Ok(RatingSession::User(session.clone())),
        (None, None) => bail!("--guest-session or --session is required"),
    }
}

async fn run_rate(client: &TmdbClient, command: RateSubcommands) -> Result<()> {
    let status = match command {
        RateSubcommands::Movie(args) => {
            let session = rating_session(&args)?;
            client
                .rate_movie(args.id, args.value, &session)
                .await
                .context("TMDB movie rating failed")?
        }
        RateSubcommands::Tv(args) => {
            let session = rating_session(&args)?;
            client
                .rate_tv(args.id, args.value, &session)
                .await
                .context("TMDB tv rating failed")?
        }
    };
    render::render_status(&status);
    Ok(())
}

async fn run_raw(client: &TmdbClient, args: RawArgs) -> Result<()> {
    let params = args
        .params
        .into_iter()
        .fold(RequestParams::new(), |p, (key, value)| p.param(key, value));
    let params = args
        .unset
        .into_iter()
        .fold(params, |p, key| p.unset(key));

    let result: Result<Value> = match args.post {
        Some(body) => {
            let body: Value = serde_json::from_str(&body).context("--post must be valid JSON")?;
            client.post(&args.path, params, &body).await
        }
        None => client.get(&args.path, params).await,
    };
    let value = result.with_context(|| format!("TMDB {} request failed", args.path))?;
    render::render_json(&value);
    Ok(())
}

/// Runs the `config show` / `config set` subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the key or value is
/// invalid, or the file cannot be written.
#[instrument(skip_all)]
pub fn run_config(command: ConfigSubcommands, dir: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;

    match command {
        ConfigSubcommands::Show => render::render_config(&config_path, &config.tmdb),
        ConfigSubcommands::Set(args) => {
            config.tmdb.set(&args.key, &args.value)?;
            config.save(&config_path).context("failed to save config")?;
            tracing::info!("Saved {} to {}", args.key, config_path.display());
        }
    }
    Ok(())
}

/// Writes shell completions to stdout.
pub fn run_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_owned();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
