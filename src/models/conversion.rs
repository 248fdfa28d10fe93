//! Completed conversion records

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use crate::utils::datetime;

/// One completed conversion, as stored in the history file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub amount: f64,
    pub currency_to_convert: CurrencyCode,
    pub result_of_conversion: f64,
    pub target_currency: CurrencyCode,
    #[serde(with = "datetime")]
    pub conversion_time: NaiveDateTime,
}

impl ConversionRecord {
    /// Record a conversion stamped with the current local time
    pub fn new(amount: f64, source: CurrencyCode, result: f64, target: CurrencyCode) -> Self {
        Self::at(amount, source, result, target, Local::now().naive_local())
    }

    pub fn at(
        amount: f64,
        source: CurrencyCode,
        result: f64,
        target: CurrencyCode,
        conversion_time: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            currency_to_convert: source,
            result_of_conversion: result,
            target_currency: target,
            conversion_time,
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The amount of {:.2} {} is equals to {:.2} {}",
            self.amount, self.currency_to_convert, self.result_of_conversion, self.target_currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 7, 250)
            .unwrap()
    }

    fn record() -> ConversionRecord {
        ConversionRecord::at(
            100.0,
            CurrencyCode::parse("USD").unwrap(),
            90.0,
            CurrencyCode::parse("EUR").unwrap(),
            fixed_time(),
        )
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let mut record = record();
        record.result_of_conversion = 90.456;
        assert_eq!(record.to_string(), "The amount of 100.00 USD is equals to 90.46 EUR");
    }

    #[test]
    fn test_json_field_names_and_time_format() {
        let value = serde_json::to_value(record()).unwrap();

        assert_eq!(value["amount"], 100.0);
        assert_eq!(value["currencyToConvert"], "USD");
        assert_eq!(value["resultOfConversion"], 90.0);
        assert_eq!(value["targetCurrency"], "EUR");
        assert_eq!(value["conversionTime"], "2024-03-09 14:05:07");
    }

    #[test]
    fn test_deserialize_truncates_to_seconds() {
        let json = serde_json::to_string(&record()).unwrap();
        let parsed: ConversionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.amount, 100.0);
        assert_eq!(parsed.currency_to_convert.as_str(), "USD");
        assert_eq!(parsed.target_currency.as_str(), "EUR");
        assert_eq!(
            parsed.conversion_time,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 5, 7).unwrap()
        );
    }
}
