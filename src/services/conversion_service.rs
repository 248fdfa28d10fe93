use thiserror::Error;

use crate::models::{CurrencyCode, RateTable};

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("The currency {0} is not available in the results")]
    UnknownTargetCurrency(CurrencyCode),
    #[error("The amount {amount:e} is too large to convert to {target}")]
    ResultOutOfRange { amount: f64, target: CurrencyCode },
}

/// Computes converted amounts from a fetched rate table
pub trait ConversionEngine {
    /// Convert `amount` of the table's base currency into `target`.
    /// `amount` is validated as positive by the caller; no rounding is applied.
    fn convert(&self, table: &RateTable, amount: f64, target: &CurrencyCode) -> Result<f64, ConversionError>;
}

/// Multiplies by the table's rate for the target currency
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectRateEngine;

impl ConversionEngine for DirectRateEngine {
    fn convert(&self, table: &RateTable, amount: f64, target: &CurrencyCode) -> Result<f64, ConversionError> {
        let rate = table
            .rate_for(target.as_str())
            .ok_or_else(|| ConversionError::UnknownTargetCurrency(target.clone()))?;
        let result = amount * rate;
        if !result.is_finite() {
            return Err(ConversionError::ResultOutOfRange {
                amount,
                target: target.clone(),
            });
        }
        Ok(result)
    }
}
