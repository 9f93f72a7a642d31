//! Application configuration.
//!
//! Values are layered: built-in defaults, then the optional TOML file under the
//! user's config directory, then `NYTGAMES_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::{
    endpoint::{Endpoints, DEFAULT_BASE_URL},
    games::Pipeline,
};

/// Directory under `~/.config` holding the config file.
pub const CONFIG_DIR: &str = "nytgames";
/// Default directory reports are written to, relative to the working directory.
pub const DEFAULT_REPORT_DIR: &str = "Reports";

const DEFAULT_CONFIG: &str = r#"# nytgames configuration
# Every value may also be set through NYTGAMES_<KEY>, e.g. NYTGAMES_REPORT_DIR.

# Publisher host.
base_url = "https://www.nytimes.com"

# Directory the dated report is written to.
report_dir = "Reports"

# Drop non-ASCII characters from every response before decoding.
strip_non_ascii = true

# Append a Sudoku section after the standard games.
include_sudoku = false
"#;

/// Runtime settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Publisher host all requests go to.
    pub base_url: String,
    /// Directory the report is written to.
    pub report_dir: PathBuf,
    /// Drop non-ASCII characters from response bodies.
    pub strip_non_ascii: bool,
    /// Append a Sudoku section to the report.
    pub include_sudoku: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            strip_non_ascii: true,
            include_sudoku: false,
        }
    }
}

impl AppConfig {
    /// Load from the default config file and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path` (if it exists) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::layered(path.as_ref(), Environment::with_prefix("NYTGAMES"))
    }

    fn layered(path: &Path, environment: Environment) -> Result<Self> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("report_dir", defaults.report_dir.to_string_lossy().to_string())?
            .set_default("strip_non_ascii", defaults.strip_non_ascii)?
            .set_default("include_sudoku", defaults.include_sudoku)?
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("failed to parse configuration")
    }

    /// Fetch pipeline settings derived from this configuration.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline {
            endpoints: Endpoints::new(self.base_url.clone()),
            strip_non_ascii: self.strip_non_ascii,
        }
    }
}

/// Default location of the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write the commented default config file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_config_at(config_path())
}

/// Write the commented default config to `path` unless it already exists.
pub fn ensure_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))
}
