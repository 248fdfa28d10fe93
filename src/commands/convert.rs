use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::console::Console;
use super::SessionError;
use crate::api::exchangerate::RateError;
use crate::models::ConversionRecord;
use crate::services::conversion_service::{ConversionEngine, ConversionError};
use crate::services::rate_service::RateProvider;

/// How a single conversion attempt ended
#[derive(Debug)]
pub enum Outcome {
    Converted(ConversionRecord),
    /// Rates could not be fetched; no target was asked for
    FetchFailed(RateError),
    /// The target is missing from the fetched rates, or the result overflowed
    ConversionFailed(ConversionError),
}

/// Run one conversion: source, amount, fetch, target, convert
pub async fn execute<R, W, E>(
    console: &mut Console<R, W>,
    provider: &dyn RateProvider,
    engine: &E,
) -> Result<Outcome, SessionError>
where
    R: BufRead,
    W: Write,
    E: ConversionEngine,
{
    let source = console.read_currency("Select the type of currency you want to convert:")?;
    let amount = console.read_amount(&source)?;

    let table = match provider.fetch_rates(&source).await {
        Ok(table) => table,
        Err(e) => {
            warn!(base = %source, "Error fetching currency data: {}", e);
            console.say(format!("Error fetching currency data: {}", e))?;
            return Ok(Outcome::FetchFailed(e));
        }
    };

    let target = console.read_currency("Enter the currency code you want to convert to:")?;

    match engine.convert(&table, amount, &target) {
        Ok(result) => {
            let record = ConversionRecord::new(amount, source, result, target);
            info!(
                source = %record.currency_to_convert,
                target = %record.target_currency,
                amount = record.amount,
                result = record.result_of_conversion,
                "Conversion completed"
            );
            console.say(format!("\n{}\n", record))?;
            Ok(Outcome::Converted(record))
        }
        Err(e) => {
            warn!("Error converting currency: {}", e);
            console.say(format!("Error converting currency: {}", e))?;
            Ok(Outcome::ConversionFailed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::conversion_service::DirectRateEngine;
    use crate::services::rate_service::stub::StubRateProvider;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[tokio::test]
    async fn test_usd_to_eur() {
        let provider = StubRateProvider::with_rates(&[("EUR", 0.9), ("USD", 1.0)]);
        let mut console = console("USD\n100\nEUR\n");

        let outcome = execute(&mut console, &provider, &DirectRateEngine).await.unwrap();

        let record = match outcome {
            Outcome::Converted(record) => record,
            other => panic!("expected a conversion, got {:?}", other),
        };
        assert_eq!(record.amount, 100.0);
        assert_eq!(record.currency_to_convert.as_str(), "USD");
        assert!((record.result_of_conversion - 90.0).abs() < 1e-9);
        assert_eq!(record.target_currency.as_str(), "EUR");
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_target_prompt() {
        let provider = StubRateProvider::failing(RateError::Api {
            status: 404,
            error_type: None,
        });
        // "EUR" would be the target answer; it must stay unread
        let mut console = console("USD 100 EUR");

        let outcome = execute(&mut console, &provider, &DirectRateEngine).await.unwrap();

        assert!(matches!(outcome, Outcome::FetchFailed(RateError::Api { status: 404, .. })));
        assert_eq!(console.next_token().unwrap(), "EUR");
    }

    #[tokio::test]
    async fn test_target_missing_from_rates_aborts() {
        let provider = StubRateProvider::with_rates(&[("EUR", 0.9)]);
        let mut console = console("USD 10 COP");

        let outcome = execute(&mut console, &provider, &DirectRateEngine).await.unwrap();

        assert!(matches!(
            outcome,
            Outcome::ConversionFailed(ConversionError::UnknownTargetCurrency(_))
        ));
    }

    #[tokio::test]
    async fn test_huge_amount_is_not_recorded() {
        let provider = StubRateProvider::with_rates(&[("COP", 4000.0)]);
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(b"USD 1e308 COP".to_vec()), &mut output);

        let outcome = execute(&mut console, &provider, &DirectRateEngine).await.unwrap();
        drop(console);

        assert!(matches!(
            outcome,
            Outcome::ConversionFailed(ConversionError::ResultOutOfRange { .. })
        ));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Error converting currency: The amount 1e308 is too large to convert to COP"));
        assert!(!output.contains("is equals to inf"));
    }
}
