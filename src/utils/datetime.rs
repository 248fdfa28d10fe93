//! Serde helpers for the history file's timestamp format.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// `yyyy-MM-dd HH:mm:ss`, local wall-clock time with second precision
pub const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize a local timestamp as `HISTORY_TIME_FORMAT`
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(HISTORY_TIME_FORMAT))
}

/// Parse a timestamp written by [`serialize`]
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, HISTORY_TIME_FORMAT)
        .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp '{}': {}", raw, e)))
}
