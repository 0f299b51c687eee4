//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the wcard application.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::content::CardContent;
use crate::error::Result;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the wcard application.
///
/// # Examples
///
/// ```
/// use wcard_config::{CardContent, Config};
///
/// let config = Config::default();
/// assert_eq!(config.content, CardContent::default());
///
/// let config = Config {
///     content: CardContent {
///         default_location: "Online Store".to_string(),
///         ..Default::default()
///     },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Copy shown by the card when a record leaves fields empty.
    #[serde(default)]
    pub content: CardContent,
}

impl Config {
    /// Creates a new configuration with built-in defaults.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./wcard.json5` or `./wcard.json`
    /// 2. User: `~/.config/wcard/config.json5` or `~/.config/wcard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wcard_config::Config;
    ///
    /// # fn example() -> wcard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        debug!("loaded config");
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any content fallback cannot be displayed.
    pub fn validate(&self) -> Result<()> {
        self.content.validate()
    }
}
