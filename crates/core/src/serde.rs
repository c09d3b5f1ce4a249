//! Serde helper functions for request deserialization.
//!
//! Names arriving from clients are trimmed before they reach validation or
//! storage, so `"  Get Rich Quick "` and `"Get Rich Quick"` are the same name.

use serde::{Deserialize, Deserializer};

/// Deserialize a string, trimming surrounding whitespace.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Deserialize an optional string, trimming surrounding whitespace.
///
/// A present but blank string stays `Some("")` so validation can reject it.
pub fn deserialize_optional_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()))
}
