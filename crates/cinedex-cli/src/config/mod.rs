//! Application configuration module.
//!
//! Manages the TOML config file holding TMDB client settings and
//! resolves the effective client from config, CLI flags and environment.

#[allow(clippy::module_inception)]
mod config;
mod paths;
mod settings;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, TMDB_KEYS, TmdbConfig};
pub use paths::resolve_config_path;
pub use settings::{CliOverrides, build_client, credentials_from_env};
