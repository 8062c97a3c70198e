use crate::config::toml_config::TomlConfig;
use crate::config::{
    ClientConfig, Settings, DEFAULT_FAVORITES_PATH, DEFAULT_LEGACY_URL, DEFAULT_PRIMARY_URL,
    DEFAULT_TIMEOUT_SECONDS,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "country-atlas")]
#[command(about = "Query the REST Countries API and manage a local favorites list")]
pub struct CliConfig {
    #[arg(long, help = "Primary API root (defaults to restcountries v3.1)")]
    pub primary_url: Option<String>,

    #[arg(long, help = "Legacy API root tried when the primary fails")]
    pub legacy_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Directory holding the favorites file")]
    pub favorites_path: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Resolves the effective settings: explicit flags win over the
    /// config file, which wins over built-in defaults.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Settings {
        let api = file.and_then(|f| f.api.as_ref());
        let favorites = file.and_then(|f| f.favorites.as_ref());

        Settings {
            client: ClientConfig {
                primary_url: self
                    .primary_url
                    .clone()
                    .or_else(|| api.and_then(|a| a.primary_url.clone()))
                    .unwrap_or_else(|| DEFAULT_PRIMARY_URL.to_string()),
                legacy_url: self
                    .legacy_url
                    .clone()
                    .or_else(|| api.and_then(|a| a.legacy_url.clone()))
                    .unwrap_or_else(|| DEFAULT_LEGACY_URL.to_string()),
                timeout_seconds: self
                    .timeout
                    .or_else(|| api.and_then(|a| a.timeout_seconds))
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            },
            favorites_path: self
                .favorites_path
                .clone()
                .or_else(|| favorites.and_then(|f| f.path.clone()))
                .unwrap_or_else(|| DEFAULT_FAVORITES_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the full country directory, sorted by common name
    All,
    /// Search countries by name fragment
    Name { name: String },
    /// List countries in a region
    Region { region: String },
    /// List countries using a currency
    Currency { currency: String },
    /// List countries speaking a language
    Lang { language: String },
    /// List countries by capital city
    Capital { capital: String },
    /// List countries by demonym
    Demonym { demonym: String },
    /// List countries by independence status
    Independent {
        #[arg(default_value_t = true, action = clap::ArgAction::Set)]
        status: bool,
    },
    /// Manage the local favorites list
    #[command(subcommand)]
    Fav(FavCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum FavCommand {
    /// Print the favorited country codes, oldest first
    List,
    /// Add a 3-letter country code to the favorites
    Add { code: String },
    /// Remove a country code from the favorites
    Remove { code: String },
    /// Check whether a country code is favorited
    Check { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{ApiConfig, FavoritesConfig};

    fn cli(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(args)
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let settings = cli(&["country-atlas", "all"]).resolve(None);

        assert_eq!(settings.client.primary_url, DEFAULT_PRIMARY_URL);
        assert_eq!(settings.client.legacy_url, DEFAULT_LEGACY_URL);
        assert_eq!(settings.client.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.favorites_path, DEFAULT_FAVORITES_PATH);
    }

    #[test]
    fn flags_override_config_file() {
        let file = TomlConfig {
            api: Some(ApiConfig {
                primary_url: Some("http://file.example/v3.1".to_string()),
                legacy_url: Some("http://file.example/v2".to_string()),
                timeout_seconds: Some(30),
            }),
            favorites: Some(FavoritesConfig {
                path: Some("/tmp/file-favorites".to_string()),
            }),
        };

        let settings = cli(&[
            "country-atlas",
            "--primary-url",
            "http://flag.example/v3.1",
            "all",
        ])
        .resolve(Some(&file));

        assert_eq!(settings.client.primary_url, "http://flag.example/v3.1");
        // Unset flags fall through to the file.
        assert_eq!(settings.client.legacy_url, "http://file.example/v2");
        assert_eq!(settings.client.timeout_seconds, 30);
        assert_eq!(settings.favorites_path, "/tmp/file-favorites");
    }

    #[test]
    fn independent_defaults_to_true() {
        let parsed = cli(&["country-atlas", "independent"]);
        match parsed.command {
            Command::Independent { status } => assert!(status),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
