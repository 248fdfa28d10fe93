//! Exchange rate models

use std::collections::HashMap;

use thiserror::Error;

use super::currency::CurrencyCode;

/// Reasons a set of fetched rates cannot form a table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateTableError {
    #[error("no conversion rates returned for {0}")]
    Empty(CurrencyCode),
    #[error("invalid rate {rate} for {code}")]
    InvalidRate { code: String, rate: f64 },
}

/// Multipliers from one base currency to every currency the provider knows.
///
/// Keys are the codes exactly as the provider returned them; they are not
/// restricted to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base_code: CurrencyCode,
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Build a table, rejecting empty rate sets and non-positive rates
    pub fn new(base_code: CurrencyCode, rates: HashMap<String, f64>) -> Result<Self, RateTableError> {
        if rates.is_empty() {
            return Err(RateTableError::Empty(base_code));
        }

        if let Some((code, rate)) = rates.iter().find(|(_, rate)| !(rate.is_finite() && **rate > 0.0)) {
            return Err(RateTableError::InvalidRate {
                code: code.clone(),
                rate: *rate,
            });
        }

        Ok(Self { base_code, rates })
    }

    pub fn base_code(&self) -> &CurrencyCode {
        &self.base_code
    }

    /// Rate for converting one unit of the base currency into `code`
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}
