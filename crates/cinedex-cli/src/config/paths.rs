//! Config directory resolution.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Directory name under the user config directory.
const APP_DIR: &str = "cinedex";
/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// - If `dir` is `Some`, returns `{dir}/config.toml`.
/// - Otherwise `$XDG_CONFIG_HOME/cinedex/config.toml` when set,
///   falling back to `~/.config/cinedex/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    config_path_from(
        dir,
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn config_path_from(
    dir: Option<&Path>,
    xdg_config_home: Option<String>,
    home: Option<String>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let base = match (xdg_config_home.filter(|v| !v.is_empty()), home) {
        (Some(xdg), _) => PathBuf::from(xdg),
        (None, Some(home)) if !home.is_empty() => PathBuf::from(home).join(".config"),
        _ => bail!("neither XDG_CONFIG_HOME nor HOME environment variable is set"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}
