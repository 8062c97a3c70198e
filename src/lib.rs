pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::args::CliConfig;
pub use config::{cli::LocalStorage, ClientConfig, Settings};
pub use core::{client::CountryClient, favorites::FavoritesStore};
pub use domain::model::Country;
pub use domain::ports::{CountrySource, Storage};
pub use utils::error::{AtlasError, Result};
