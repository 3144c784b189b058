//! Configuration loading and resolution
//!
//! Resolution follows a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default autosave interval for new drafts, in seconds
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// TOML configuration file schema
///
/// Missing file or missing keys never terminate startup; every field
/// falls back to a compiled default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Content API base URL
    pub api_base_url: Option<String>,
    /// Directory holding the local draft-slot database
    pub data_dir: Option<PathBuf>,
    /// Autosave interval in seconds
    pub autosave_interval_secs: Option<u64>,
    /// Overwrite any manual summary with the derived one at submit time
    pub auto_summary_override: Option<bool>,
    /// Deduplicate created artist names ignoring case
    pub artist_dedup_case_insensitive: Option<bool>,
}

/// Fully-resolved authoring configuration
#[derive(Debug, Clone)]
pub struct AuthoringConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub autosave_interval_secs: u64,
    pub auto_summary_override: bool,
    pub artist_dedup_case_insensitive: bool,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            data_dir: default_data_dir(),
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
            auto_summary_override: true,
            artist_dedup_case_insensitive: false,
        }
    }
}

impl AuthoringConfig {
    /// Resolve configuration from CLI argument, environment, TOML file,
    /// and compiled defaults, in that priority order.
    pub fn resolve(cli_api_base_url: Option<&str>, cli_data_dir: Option<&str>) -> Self {
        let toml_config = load_toml_config().unwrap_or_else(|e| {
            warn!("Config file not loaded ({}), using defaults", e);
            TomlConfig::default()
        });

        let defaults = Self::default();

        let api_base_url = cli_api_base_url
            .map(str::to_string)
            .or_else(|| std::env::var("PRESSROOM_API_BASE_URL").ok())
            .or(toml_config.api_base_url)
            .unwrap_or(defaults.api_base_url);

        let data_dir = cli_data_dir
            .map(PathBuf::from)
            .or_else(|| std::env::var("PRESSROOM_DATA_DIR").ok().map(PathBuf::from))
            .or(toml_config.data_dir)
            .unwrap_or(defaults.data_dir);

        Self {
            api_base_url,
            data_dir,
            autosave_interval_secs: toml_config
                .autosave_interval_secs
                .unwrap_or(defaults.autosave_interval_secs),
            auto_summary_override: toml_config
                .auto_summary_override
                .unwrap_or(defaults.auto_summary_override),
            artist_dedup_case_insensitive: toml_config
                .artist_dedup_case_insensitive
                .unwrap_or(defaults.artist_dedup_case_insensitive),
        }
    }

    /// Path of the local slot database inside the data directory
    pub fn slot_db_path(&self) -> PathBuf {
        self.data_dir.join("drafts.db")
    }
}

/// Locate and parse the TOML config file
fn load_toml_config() -> Result<TomlConfig> {
    let path = config_file_path()?;
    parse_toml_config(&path)
}

/// Parse a TOML config file at an explicit path
pub fn parse_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read config failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse config failed: {}", e)))
}

/// Write a TOML config file (best-effort, parent directory created)
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Serialize config failed: {}", e)))?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Default configuration file path for the platform
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("pressroom").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("pressroom"))
        .unwrap_or_else(|| PathBuf::from("./pressroom_data"))
}
