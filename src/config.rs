//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::layout::{PLACEHOLDER, TAB_WIDTH};
use crate::error::{Error, Result};
use crate::notation::LayoutOptions;

/// Environment variable overriding the tab width.
pub const ENV_TAB_WIDTH: &str = "CHORDSHEET_TAB_WIDTH";

/// Environment variable overriding the chord-row placeholder character.
pub const ENV_PLACEHOLDER: &str = "CHORDSHEET_PLACEHOLDER";

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Display width of a tab stop
    pub tab_width: usize,
    /// Filler written into empty chord-row columns
    pub placeholder: char,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Layout options for the notation engine.
    #[must_use]
    pub const fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            tab_width: self.tab_width,
            placeholder: self.placeholder,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            tab_width: TAB_WIDTH,
            placeholder: PLACEHOLDER,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Invalid values are logged and the defaults kept.
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_TAB_WIDTH) {
            match parse_tab_width(&raw) {
                Ok(width) => config.tab_width = width,
                Err(e) => tracing::warn!("{e}"),
            }
        }

        if let Ok(raw) = env::var(ENV_PLACEHOLDER) {
            match parse_placeholder(&raw) {
                Ok(c) => config.placeholder = c,
                Err(e) => tracing::warn!("{e}"),
            }
        }

        Ok(config)
    }
}

/// Parse a tab width override.
pub fn parse_tab_width(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(Error::config(
            format!("{ENV_TAB_WIDTH}={raw:?} is not a positive integer"),
            "Use a value such as 4 or 8",
        )),
    }
}

/// Parse a placeholder override: exactly one character.
pub fn parse_placeholder(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::config(
            format!("{ENV_PLACEHOLDER}={raw:?} is not a single character"),
            "Use one character, for example a space or a middle dot",
        )),
    }
}
