//! Supported currencies and validated currency codes

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    /// Currencies offered in the menu, keyed by ISO code
    static ref CATALOG: BTreeMap<&'static str, &'static str> = {
        let mut catalog = BTreeMap::new();
        catalog.insert("ARS", "Argentine Pesos");
        catalog.insert("BRL", "Brazilian Real");
        catalog.insert("CAD", "Canadian Dollar");
        catalog.insert("COP", "Colombian Pesos");
        catalog.insert("EUR", "Euro");
        catalog.insert("GBP", "Pound Sterling");
        catalog.insert("MXN", "Mexican Pesos");
        catalog.insert("USD", "US dollars");
        catalog
    };
}

/// Currency validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("Unsupported currency: {0}")]
    Unsupported(String),
}

/// Check whether a code (already uppercased) is in the catalog
pub fn contains(code: &str) -> bool {
    CATALOG.contains_key(code)
}

/// Catalog entries as `(code, display name)`, ordered by code
pub fn entries() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|(code, name)| (*code, *name)).collect()
}

/// A currency code that is known to be in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Uppercase the input and validate it against the catalog
    pub fn parse(input: &str) -> Result<Self, CurrencyError> {
        let code = input.trim().to_uppercase();
        if contains(&code) {
            Ok(Self(code))
        } else {
            Err(CurrencyError::Unsupported(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}
