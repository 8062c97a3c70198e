use crate::domain::model::Country;
use crate::utils::error::{AtlasError, Result};
use reqwest::Client;
use url::Url;

/// One rung of a fallback ladder: a labelled request to try.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub label: String,
    pub url: Url,
}

impl Attempt {
    pub fn new(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }
}

/// Runs the attempts strictly in order and returns the first body that
/// parses as a country array.
///
/// An attempt fails on a transport error, a non-2xx status, or an
/// unreadable body. Every failure is logged and the next variant is
/// tried; only exhaustion of the whole ladder is an error.
pub async fn run_ladder(
    client: &Client,
    query: &str,
    attempts: &[Attempt],
) -> Result<Vec<Country>> {
    let mut last_error = String::from("no attempts configured");

    for attempt in attempts {
        tracing::debug!("Requesting {} ({})", attempt.url, attempt.label);

        let response = match client.get(attempt.url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Attempt '{}' for {} failed: {}", attempt.label, query, e);
                last_error = e.to_string();
                continue;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Attempt '{}' for {} returned status {}",
                attempt.label,
                query,
                status
            );
            last_error = format!("status {}", status.as_u16());
            continue;
        }

        match response.json::<Vec<Country>>().await {
            Ok(countries) => return Ok(countries),
            Err(e) => {
                tracing::warn!(
                    "Attempt '{}' for {} returned an unreadable body: {}",
                    attempt.label,
                    query,
                    e
                );
                last_error = e.to_string();
            }
        }
    }

    Err(AtlasError::LadderExhaustedError {
        query: query.to_string(),
        attempts: attempts.len(),
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_ladder_reports_exhaustion() {
        let client = Client::new();
        let result = run_ladder(&client, "nothing", &[]).await;

        match result {
            Err(AtlasError::LadderExhaustedError {
                query, attempts, ..
            }) => {
                assert_eq!(query, "nothing");
                assert_eq!(attempts, 0);
            }
            other => panic!("expected exhaustion, got {:?}", other.map(|v| v.len())),
        }
    }
}
