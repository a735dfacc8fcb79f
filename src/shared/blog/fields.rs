//! Field rules shared by the blog payloads.

use serde::{Deserialize, Deserializer};

use crate::shared::error::SharedError;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// Deserialize a field that may be present with `null`.
///
/// Combined with `#[serde(default)]` this yields `None` when the key is
/// absent, `Some(None)` for an explicit `null` and `Some(Some(v))` otherwise.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Trim a text field and reject it when empty.
pub fn clean_text(field: &str, value: &str) -> Result<String, SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(field, BLANK));
    }
    Ok(trimmed.to_string())
}

/// Clean an optional text field, requiring it unless the update is partial.
pub fn clean_optional_text(
    field: &str,
    value: Option<&str>,
    partial: bool,
) -> Result<Option<String>, SharedError> {
    match value {
        Some(value) => clean_text(field, value).map(Some),
        None if partial => Ok(None),
        None => Err(SharedError::validation(field, REQUIRED)),
    }
}
