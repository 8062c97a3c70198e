use crate::config::ClientConfig;
use crate::core::fallback::fallback_countries;
use crate::core::ladder::{run_ladder, Attempt};
use crate::domain::model::Country;
use crate::domain::ports::CountrySource;
use crate::utils::error::{AtlasError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Field projection requested on the first `/all` attempt. Keeps the
/// directory payload small; the later attempts fall back to full
/// bodies.
const ALL_FIELDS: &str =
    "name,capital,region,subregion,population,flags,languages,currencies,borders,area,timezones,demonyms,idd,cca3";

/// HTTP client for the countries API.
///
/// Configuration is injected at construction; there is no global base
/// URL. Every call re-issues requests, callers memoize per view if
/// they need to.
pub struct CountryClient {
    client: Client,
    config: ClientConfig,
}

impl CountryClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(base)?;
        {
            let mut path =
                url.path_segments_mut()
                    .map_err(|_| AtlasError::InvalidConfigValueError {
                        field: "base_url".to_string(),
                        value: base.to_string(),
                        reason: "URL cannot be a base".to_string(),
                    })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Single request with no fallback variant. A 404 is a normal
    /// empty result only for the name search.
    async fn single_request(
        &self,
        query: &str,
        url: Url,
        empty_on_not_found: bool,
    ) -> Result<Vec<Country>> {
        tracing::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if empty_on_not_found && status == StatusCode::NOT_FOUND {
            tracing::debug!("{} returned 404, treating as no match", query);
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(AtlasError::HttpStatusError {
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Vec<Country>>().await?)
    }

    /// The current-then-legacy ladder shared by the targeted queries.
    async fn primary_then_legacy(&self, query: &str, segments: &[&str]) -> Result<Vec<Country>> {
        let attempts = vec![
            Attempt::new(
                "primary API",
                Self::endpoint(&self.config.primary_url, segments)?,
            ),
            Attempt::new(
                "legacy API",
                Self::endpoint(&self.config.legacy_url, segments)?,
            ),
        ];
        run_ladder(&self.client, query, &attempts).await
    }
}

#[async_trait]
impl CountrySource for CountryClient {
    /// The directory query behind the main listing view. Never fails
    /// outward: when every attempt is exhausted the embedded fallback
    /// set is served instead, so callers always get a non-empty,
    /// well-formed result.
    async fn fetch_all_countries(&self) -> Result<Vec<Country>> {
        let mut projected = Self::endpoint(&self.config.primary_url, &["all"])?;
        projected
            .query_pairs_mut()
            .append_pair("fields", ALL_FIELDS);

        let attempts = vec![
            Attempt::new("primary API, projected fields", projected),
            Attempt::new(
                "primary API, full records",
                Self::endpoint(&self.config.primary_url, &["all"])?,
            ),
            Attempt::new(
                "legacy API",
                Self::endpoint(&self.config.legacy_url, &["all"])?,
            ),
        ];

        let mut countries = match run_ladder(&self.client, "all countries", &attempts).await {
            Ok(countries) => countries,
            Err(e) => {
                tracing::warn!("All directory attempts failed, serving embedded fallback: {}", e);
                fallback_countries()
            }
        };

        countries.sort_by_cached_key(|c| c.name.common.to_lowercase());
        Ok(countries)
    }

    async fn fetch_country_by_name(&self, name: &str) -> Result<Vec<Country>> {
        let url = Self::endpoint(&self.config.primary_url, &["name", name])?;
        self.single_request(&format!("name '{}'", name), url, true)
            .await
    }

    async fn fetch_countries_by_region(&self, region: &str) -> Result<Vec<Country>> {
        let url = Self::endpoint(&self.config.primary_url, &["region", region])?;
        self.single_request(&format!("region '{}'", region), url, false)
            .await
    }

    async fn fetch_countries_by_currency(&self, currency: &str) -> Result<Vec<Country>> {
        self.primary_then_legacy(&format!("currency '{}'", currency), &["currency", currency])
            .await
    }

    async fn fetch_countries_by_language(&self, language: &str) -> Result<Vec<Country>> {
        self.primary_then_legacy(&format!("language '{}'", language), &["lang", language])
            .await
    }

    async fn fetch_countries_by_capital(&self, capital: &str) -> Result<Vec<Country>> {
        self.primary_then_legacy(&format!("capital '{}'", capital), &["capital", capital])
            .await
    }

    async fn fetch_countries_by_demonym(&self, demonym: &str) -> Result<Vec<Country>> {
        self.primary_then_legacy(&format!("demonym '{}'", demonym), &["demonym", demonym])
            .await
    }

    async fn fetch_independent_countries(&self, status: bool) -> Result<Vec<Country>> {
        let status_value = if status { "true" } else { "false" };
        let mut primary = Self::endpoint(&self.config.primary_url, &["independent"])?;
        primary
            .query_pairs_mut()
            .append_pair("status", status_value);
        let mut legacy = Self::endpoint(&self.config.legacy_url, &["independent"])?;
        legacy.query_pairs_mut().append_pair("status", status_value);

        let attempts = vec![
            Attempt::new("primary API", primary),
            Attempt::new("legacy API", legacy),
        ];
        run_ladder(
            &self.client,
            &format!("independent={}", status_value),
            &attempts,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let url =
            CountryClient::endpoint("https://restcountries.com/v3.1", &["name", "south africa"])
                .unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/south%20africa"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let url = CountryClient::endpoint("https://restcountries.com/v2/", &["all"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v2/all");
    }
}
