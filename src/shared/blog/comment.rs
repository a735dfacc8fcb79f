//! Comment Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{clean_optional_text, deserialize_some};
use crate::shared::error::SharedError;

/// A comment as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    /// Username of the author
    pub author: String,
    /// ID of the commented post
    pub post: i64,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Body of `POST`, `PUT` and `PATCH` on comments
///
/// `author`, `post` and `created` are read-only and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPayload {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub text: Option<Option<String>>,
}

impl CommentPayload {
    /// Validated text; `None` only for a partial update without `text`
    pub fn into_text(self, partial: bool) -> Result<Option<String>, SharedError> {
        match self.text {
            Some(None) => Err(SharedError::validation("text", "This field may not be null.")),
            Some(Some(text)) => clean_optional_text("text", Some(&text), partial),
            None => clean_optional_text("text", None, partial),
        }
    }
}
