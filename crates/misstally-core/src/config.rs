//! misstally configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::collector::DEFAULT_SENTINEL;
use crate::tally::DEFAULT_TALLY_SENTINEL;

/// Top-level misstally configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisstallyConfig {
    /// Directory scanned for test definition `.json` files.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,
    /// Token that finishes missed-question entry.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    /// Token that finishes a free-form tally.
    #[serde(default = "default_tally_sentinel")]
    pub tally_sentinel: String,
    /// Output format: table, markdown or json.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}
fn default_tally_sentinel() -> String {
    DEFAULT_TALLY_SENTINEL.to_string()
}
fn default_format() -> String {
    "table".to_string()
}

impl Default for MisstallyConfig {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            sentinel: default_sentinel(),
            tally_sentinel: default_tally_sentinel(),
            format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `misstally.toml` in the current directory
/// 2. `~/.config/misstally/config.toml`
///
/// `MISSTALLY_CATALOG_DIR` overrides `catalog_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<MisstallyConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("misstally.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MisstallyConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MisstallyConfig::default(),
    };

    if let Ok(dir) = std::env::var("MISSTALLY_CATALOG_DIR") {
        config.catalog_dir = PathBuf::from(dir);
    }

    let catalog_dir = config.catalog_dir.to_string_lossy().into_owned();
    config.catalog_dir = PathBuf::from(resolve_env_vars(&catalog_dir));

    anyhow::ensure!(
        !config.sentinel.trim().is_empty(),
        "sentinel must not be empty"
    );
    anyhow::ensure!(
        !config.tally_sentinel.trim().is_empty(),
        "tally_sentinel must not be empty"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("misstally"))
}
