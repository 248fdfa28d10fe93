//! Data models for the converter
//!
//! Currency codes, fetched rate tables and completed conversion records.

pub mod currency;
pub mod rate;
pub mod conversion;

// Re-export commonly used types for convenience
pub use currency::CurrencyCode;
pub use rate::RateTable;
pub use conversion::ConversionRecord;
