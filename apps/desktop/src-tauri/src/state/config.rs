//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ABACUS_PRECISION=4                                                 │
//! │     ABACUS_KEYBOARD=off                                                │
//! │     ABACUS_WINDOW_TITLE="Desk Calculator"                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $ABACUS_CONFIG_PATH, or                                            │
//! │     ~/.config/abacus/config.toml (Linux)                               │
//! │     ~/Library/Application Support/com.abacus.calculator/config.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     precision = 2, keyboard enabled                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! precision = 2
//! keyboardEnabled = true
//! windowTitle = "Abacus"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use abacus_core::validation::{parse_precision, validate_precision};
use abacus_core::{Calculator, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ABACUS_CONFIG_PATH";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Decimal places calculation results are rounded to.
    pub precision: u32,

    /// Whether keyboard events reach the calculator.
    pub keyboard_enabled: bool,

    /// Title of the desktop window.
    pub window_title: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Precision: 2 decimal places
    /// - Keyboard: enabled
    /// - Title: "Abacus"
    fn default() -> Self {
        ConfigState {
            precision: DEFAULT_PRECISION,
            keyboard_enabled: true,
            window_title: "Abacus".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, `ABACUS_CONFIG_PATH`, or platform dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads a config file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves configuration to file, after validating it.
    ///
    /// The path is resolved like [`ConfigState::load`] resolves it, so a saved
    /// file is the one the next start reads.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        self.validate()?;

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.clone(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(io_err)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_precision(self.precision)?;
        Ok(())
    }

    /// Builds a calculator engine with this configuration.
    pub fn build_calculator(&self) -> Calculator {
        Calculator::with_precision(self.precision).unwrap_or_else(|e| {
            warn!("Invalid precision {}: {}. Using defaults.", self.precision, e);
            Calculator::new()
        })
    }

    /// Applies environment variable overrides.
    ///
    /// ## Environment Variables
    /// - `ABACUS_PRECISION`: decimal places (0-10)
    /// - `ABACUS_KEYBOARD`: `on`/`off` (also `true`/`false`, `1`/`0`)
    /// - `ABACUS_WINDOW_TITLE`: window title
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source. Invalid values are logged
    /// and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ABACUS_PRECISION") {
            match parse_precision(&raw) {
                Ok(precision) => {
                    debug!(precision, "Overriding precision from environment");
                    self.precision = precision;
                }
                Err(e) => warn!("Ignoring ABACUS_PRECISION: {}", e),
            }
        }

        if let Some(raw) = lookup("ABACUS_KEYBOARD") {
            match parse_switch(&raw) {
                Some(enabled) => self.keyboard_enabled = enabled,
                None => warn!(value = %raw, "Ignoring unknown ABACUS_KEYBOARD value"),
            }
        }

        if let Some(title) = lookup("ABACUS_WINDOW_TITLE") {
            self.window_title = title;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "abacus", "calculator")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
