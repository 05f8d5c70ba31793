//! Weight table and campaign file loading.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use leadscope_lib::{MarketTables, RoiConfig};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TABLES_FILE: &str = "tables.json";

/// Returns the per-user tables file, whether or not it exists.
pub(crate) fn user_tables_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "leadscope").map(|dirs| dirs.config_dir().join(TABLES_FILE))
}

/// Resolves the weight tables to estimate with.
///
/// An explicit path (flag or `LEADSCOPE_TABLES`) wins, then a `tables.json`
/// in the user config directory, then the built-in tables.
pub(crate) fn load_tables(explicit: Option<&Path>) -> Result<Cow<'static, MarketTables>> {
    resolve_tables(explicit, user_tables_path().as_deref())
}

fn resolve_tables(
    explicit: Option<&Path>,
    user_file: Option<&Path>,
) -> Result<Cow<'static, MarketTables>> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading tables");
        return MarketTables::from_path(path)
            .map(Cow::Owned)
            .with_context(|| format!("Failed to load tables from {}", path.display()));
    }

    if let Some(path) = user_file.filter(|path| path.is_file()) {
        info!(path = %path.display(), "loading user tables");
        return MarketTables::from_path(path)
            .map(Cow::Owned)
            .with_context(|| format!("Failed to load tables from {}", path.display()));
    }

    debug!("using built-in tables");
    Ok(Cow::Borrowed(MarketTables::global()))
}

/// Reads a campaign JSON file. Missing fields keep their defaults.
pub(crate) fn load_campaign(path: &Path) -> Result<RoiConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read campaign file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid campaign file {}", path.display()))
}
