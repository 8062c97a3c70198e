pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod args;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};

pub const DEFAULT_PRIMARY_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_LEGACY_URL: &str = "https://restcountries.com/v2";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_FAVORITES_PATH: &str = "./data";

/// Injected client configuration. Tests point both roots at a mock
/// server instead of overriding globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub primary_url: String,
    pub legacy_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            legacy_url: DEFAULT_LEGACY_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("primary_url", &self.primary_url)?;
        validate_url("legacy_url", &self.legacy_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)
    }
}

/// Fully resolved runtime settings: CLI flags over config file over
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientConfig,
    pub favorites_path: String,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.client.validate()?;
        validate_path("favorites_path", &self.favorites_path)
    }
}
