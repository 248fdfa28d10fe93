use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use std::time::Duration;
use super::models::{ErrorResponse, LatestRatesResponse, RateError};
use crate::config::{Config, ConfigError};
use crate::models::{CurrencyCode, RateTable};
use tracing::{debug, warn};

/// ExchangeRate-API client for the latest rates of a base currency
pub struct ExchangeRateClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl ExchangeRateClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone(), config.request_timeout)
    }

    /// Create a client against an alternate endpoint (mirrors, local servers, tests)
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Result<Self, ConfigError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url,
        })
    }

    /// `{base_url}{api_key}/latest/{code}`
    fn latest_url(&self, code: &CurrencyCode) -> String {
        format!("{}{}/latest/{}", self.base_url, self.api_key, code)
    }

    /// Map a failed response to an error, keeping the API's `error-type` if present
    fn handle_error_response(status: StatusCode, body_text: &str) -> RateError {
        let error_type = serde_json::from_str::<ErrorResponse>(body_text)
            .ok()
            .and_then(|err| err.error_type);

        warn!(
            status = status.as_u16(),
            error_type = error_type.as_deref().unwrap_or("unknown"),
            "Exchange rate API returned an error"
        );

        RateError::Api {
            status: status.as_u16(),
            error_type,
        }
    }

    /// Classify a response and turn a successful body into a rate table
    pub fn parse_latest_rates(
        requested: &CurrencyCode,
        status: StatusCode,
        body_text: &str,
    ) -> Result<RateTable, RateError> {
        if !status.is_success() {
            return Err(Self::handle_error_response(status, body_text));
        }

        let body: LatestRatesResponse = serde_json::from_str(body_text)
            .map_err(|e| RateError::Parse(e.to_string()))?;

        if !body.base_code.eq_ignore_ascii_case(requested.as_str()) {
            return Err(RateError::Parse(format!(
                "expected rates for {}, got {}",
                requested, body.base_code
            )));
        }

        RateTable::new(requested.clone(), body.conversion_rates)
            .map_err(|e| RateError::Parse(e.to_string()))
    }

    /// GET /{api_key}/latest/{code}
    ///
    /// Exactly one request per call; nothing is cached or retried.
    pub async fn latest_rates(&self, code: &CurrencyCode) -> Result<RateTable, RateError> {
        debug!(base = %code, "Fetching latest rates");

        let response = self.http_client
            .get(self.latest_url(code))
            .send()
            .await
            .map_err(|e| RateError::Network(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| RateError::Network(format!("Failed to read response: {}", e.without_url())))?;

        let table = Self::parse_latest_rates(code, status, &body_text)?;
        debug!(base = %table.base_code(), rates = table.len(), "Fetched latest rates");
        Ok(table)
    }
}
