use crate::domain::model::Country;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote source of country records.
///
/// A display layer consumes this surface instead of the concrete
/// client so network access can be replaced by a double in tests.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all_countries(&self) -> Result<Vec<Country>>;
    async fn fetch_country_by_name(&self, name: &str) -> Result<Vec<Country>>;
    async fn fetch_countries_by_region(&self, region: &str) -> Result<Vec<Country>>;
    async fn fetch_countries_by_currency(&self, currency: &str) -> Result<Vec<Country>>;
    async fn fetch_countries_by_language(&self, language: &str) -> Result<Vec<Country>>;
    async fn fetch_countries_by_capital(&self, capital: &str) -> Result<Vec<Country>>;
    async fn fetch_countries_by_demonym(&self, demonym: &str) -> Result<Vec<Country>>;
    async fn fetch_independent_countries(&self, status: bool) -> Result<Vec<Country>>;
}

/// Durable key/value storage backing the favorites list.
///
/// Reads and writes are synchronous and immediately durable. Single
/// writer assumed; there is no locking or versioning.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
