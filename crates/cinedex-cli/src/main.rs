//! cinedex - TMDB movie and TV metadata CLI.

/// Command-line argument definitions.
mod cli;
/// Subcommand runners.
mod commands;
/// Application configuration (TOML).
mod config;
/// Response rendering.
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use cinedex_api::tmdb::TmdbApiError;

use crate::cli::{Cli, Commands};
use crate::config::CliOverrides;

/// Initializes the tracing subscriber (fmt, plus OTLP export when configured).
fn init_tracing() {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let dir = cli.dir.as_deref();
    let result = match cli.command {
        Commands::Config(cmd) => commands::run_config(cmd.command, dir),
        Commands::Completions(args) => {
            commands::run_completions(args.shell);
            Ok(())
        }
        Commands::Tmdb(command) => {
            let overrides = CliOverrides {
                language: cli.language,
                region: cli.region,
                include_adult: cli.include_adult,
            };
            match commands::build_tmdb_client(dir, &overrides) {
                Ok(client) => commands::run_tmdb(&client, command).await,
                Err(e) => Err(e),
            }
        }
    };

    if let Err(ref e) = result
        && e.downcast_ref::<TmdbApiError>()
            .is_some_and(TmdbApiError::is_unauthorized)
    {
        tracing::error!("TMDB rejected the credentials; check TMDB_API_TOKEN or TMDB_API_KEY");
    }
    result
}
