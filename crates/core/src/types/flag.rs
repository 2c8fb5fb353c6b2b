//! Boolean flag parsing for query-string parameters.
//!
//! Query strings carry booleans as text, and "any non-empty value is true"
//! coercion turns `has_wifi=false` into `true`. The parser here accepts an
//! enumerated set of spellings instead and rejects everything else:
//!
//! - `"true"`, `"1"` parse to `true`
//! - `"false"`, `"0"`, `""` parse to `false`
//! - an absent parameter is `false` (use `#[serde(default)]` on the field)
//! - anything else is a [`FlagParseError`]
//!
//! Matching is ASCII case-insensitive, so `TRUE` and `False` are accepted.

use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

/// Error returned when a flag value is not one of the accepted spellings.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid flag value {value:?}, expected one of \"true\", \"1\", \"false\", \"0\" or empty")]
pub struct FlagParseError {
    /// The rejected raw value.
    pub value: String,
}

/// Parse a query-string flag value.
///
/// # Errors
///
/// Returns [`FlagParseError`] if the value is not an accepted spelling.
pub fn parse_flag(value: &str) -> Result<bool, FlagParseError> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" || value.is_empty() {
        Ok(false)
    } else {
        Err(FlagParseError {
            value: value.to_owned(),
        })
    }
}

/// Serde adapter for [`parse_flag`].
///
/// Use together with `#[serde(default)]` so an absent parameter is `false`:
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Params {
///     #[serde(default, deserialize_with = "cafe_api_core::flag::deserialize")]
///     has_wifi: bool,
/// }
/// ```
///
/// # Errors
///
/// Returns a deserialization error if the value is not an accepted spelling.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).map_err(de::Error::custom)
}
