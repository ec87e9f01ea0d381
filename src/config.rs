//! Application configuration management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Cover art fetching
    #[serde(default)]
    pub covers: CoverConfig,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Fetch and draw cover art (requires network access)
    #[serde(default = "default_true")]
    pub show_covers: bool,

    /// Interpolate hover effects instead of switching instantly
    #[serde(default = "default_true")]
    pub animations: bool,

    /// Capture the mouse for hover tracking
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Cover art fetching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverConfig {
    /// HTTP timeout per cover, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    33
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_covers: true,
            animations: true,
            mouse: true,
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;

        Ok(config_dir.join("yourvibe").join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;

        // Keep the redraw loop responsive without spinning
        config.ui.tick_ms = config.ui.tick_ms.clamp(10, 250);

        Ok(config)
    }

    /// Interval between ticks of the UI loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    /// Timeout for a single cover request.
    pub fn cover_timeout(&self) -> Duration {
        Duration::from_secs(self.covers.timeout_secs.max(1))
    }
}
