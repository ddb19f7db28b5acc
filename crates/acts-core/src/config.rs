use crate::http::{DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/acts/config.toml`.
///
/// Every field has a default, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActsConfig {
    /// Root directory for downloaded documents.
    pub output_dir: PathBuf,
    /// Total timeout for HTML page fetches.
    pub page_timeout_secs: u64,
    /// Total timeout for a single document download.
    pub download_timeout_secs: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Accept header for document downloads.
    pub accept: String,
}

impl Default for ActsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("legal_acts"),
            page_timeout_secs: 30,
            download_timeout_secs: 60,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("acts")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ActsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ActsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ActsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
