use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File verified when neither the command line nor the config names one.
pub const DEFAULT_TARGET: &str = "zooey-picture.jpg";

/// Known-good SHA-256 of [`DEFAULT_TARGET`].
pub const DEFAULT_EXPECTED_DIGEST: &str =
    "13592018079f2e42318432b4249f66a8e67f38c770be023e6dacac2cac1a201a";

/// Global configuration loaded from `~/.config/digestcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestcheckConfig {
    /// File to verify when no path is given on the command line.
    pub target_path: PathBuf,
    /// Expected SHA-256 of the target, as hex.
    pub expected_digest: String,
    /// Exit non-zero when the verdict is not a match.
    pub strict: bool,
}

impl Default for DigestcheckConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET),
            expected_digest: DEFAULT_EXPECTED_DIGEST.to_string(),
            strict: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("digestcheck")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Only an existing file that cannot be read or parsed is an error; when the
/// config location is unusable the built-in defaults are returned.
pub fn load_or_init() -> Result<DigestcheckConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("no config location, using defaults: {:#}", err);
            Ok(DigestcheckConfig::default())
        }
    }
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DigestcheckConfig> {
    if !path.exists() {
        let default_cfg = DigestcheckConfig::default();
        match write_config(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(err) => tracing::warn!("could not create default config: {:#}", err),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DigestcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(path: &Path, cfg: &DigestcheckConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
