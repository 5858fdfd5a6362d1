//! Driver configuration loaded from `~/.webstep/config.json`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::webdriver::BrowserType;

/// Environment variable overriding the configured default wait
pub const DEFAULT_WAIT_ENV: &str = "WEBSTEP_DEFAULT_WAIT_MS";

/// Settings for connecting to a browser and waiting on elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Browser to start a session for
    pub browser: BrowserType,
    /// WebDriver endpoint, the browser's default port when unset
    pub webdriver_url: Option<String>,
    /// Run without a visible window
    pub headless: bool,
    /// Timeout for waits that do not give one
    pub default_wait_ms: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            browser: BrowserType::default(),
            webdriver_url: None,
            headless: true,
            default_wait_ms: None,
        }
    }
}

impl DriverConfig {
    /// Location of the user's config file
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Unable to determine home directory")?;
        Ok(home_dir.join(".webstep").join("config.json"))
    }

    /// Load the user's config file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Apply [`DEFAULT_WAIT_ENV`] if it is set
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(DEFAULT_WAIT_ENV) {
            let ms = value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of milliseconds", DEFAULT_WAIT_ENV))?;
            self.default_wait_ms = Some(ms);
        }
        Ok(())
    }

    pub fn webdriver_url(&self) -> String {
        self.webdriver_url
            .clone()
            .unwrap_or_else(|| self.browser.default_webdriver_url().to_string())
    }

    /// Configured default wait; `0` counts as unset
    pub fn default_wait(&self) -> Option<Duration> {
        self.default_wait_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
