//! Rate provider seam between the session and the exchange rate API.

use async_trait::async_trait;

use crate::api::exchangerate::{ExchangeRateClient, RateError};
use crate::models::{CurrencyCode, RateTable};

/// Source of the latest rates for a base currency
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch a fresh rate table for `base`. Every call is a new lookup.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateError>;
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateError> {
        self.latest_rates(base).await
    }
}
