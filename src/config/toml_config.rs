use crate::utils::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional TOML config file. Every field is optional; anything unset
/// falls through to the CLI flag or the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub favorites: Option<FavoritesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub primary_url: Option<String>,
    pub legacy_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritesConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn load(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw).map_err(|e| AtlasError::ConfigError {
            message: format!("failed to parse {}: {}", path, e),
        })
    }

    fn parse(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let raw = r#"
            [api]
            primary_url = "https://restcountries.com/v3.1"
            legacy_url = "https://restcountries.com/v2"
            timeout_seconds = 5

            [favorites]
            path = "/tmp/atlas"
        "#;
        let config = TomlConfig::parse(raw).unwrap();

        let api = config.api.unwrap();
        assert_eq!(api.timeout_seconds, Some(5));
        assert_eq!(
            config.favorites.unwrap().path.as_deref(),
            Some("/tmp/atlas")
        );
    }

    #[test]
    fn parses_empty_file() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.api.is_none());
        assert!(config.favorites.is_none());
    }
}
