use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Response from the `/latest/{code}` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    pub base_code: String,
    pub conversion_rates: HashMap<String, f64>,
}

/// Error body returned by the API on failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub result: Option<String>,
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
}

/// Failures while fetching rates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("Network Error: {0}")]
    Network(String),
    /// Non-2xx status
    #[error(
        "Error in the API request. Status code: {status}{}",
        .error_type.as_deref().map(|t| format!(" ({})", t)).unwrap_or_default()
    )]
    Api {
        status: u16,
        error_type: Option<String>,
    },
    /// Body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
