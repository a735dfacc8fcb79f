//! Post Data Structure
//!
//! Represents a post as returned by the API and the bodies accepted when a
//! post is created or edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{clean_optional_text, deserialize_some};
use crate::shared::error::SharedError;

const NULL: &str = "This field may not be null.";

/// A post as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Post ID
    pub id: i64,
    /// Username of the author
    pub author: String,
    /// Post body
    pub text: String,
    /// Publication timestamp, set when the post is created
    pub pub_date: DateTime<Utc>,
    /// Optional image reference
    pub image: Option<String>,
    /// ID of the group the post is filed under
    pub group: Option<i64>,
}

/// Body of `POST`, `PUT` and `PATCH` on posts
///
/// `author` and `pub_date` are read-only: unknown keys are ignored, so a
/// client cannot set them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPayload {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub text: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub group: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub image: Option<Option<String>>,
}

/// Validated fields for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    pub group: Option<i64>,
    pub image: Option<String>,
}

/// Validated changes to an existing post; `None` leaves a column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub text: Option<String>,
    pub group: Option<Option<i64>>,
    pub image: Option<Option<String>>,
}

impl PostPayload {
    /// Validate the body of a create request
    pub fn into_new_post(self) -> Result<NewPost, SharedError> {
        let changes = self.into_changes(false)?;
        Ok(NewPost {
            text: changes.text.unwrap_or_default(),
            group: changes.group.flatten(),
            image: changes.image.flatten(),
        })
    }

    /// Validate the body of an update; `partial` is true for `PATCH`
    pub fn into_changes(self, partial: bool) -> Result<PostChanges, SharedError> {
        let text = match self.text {
            Some(None) => return Err(SharedError::validation("text", NULL)),
            Some(Some(text)) => clean_optional_text("text", Some(&text), partial)?,
            None => clean_optional_text("text", None, partial)?,
        };

        let image = self.image.map(|image| {
            image
                .map(|reference| reference.trim().to_string())
                .filter(|reference| !reference.is_empty())
        });

        Ok(PostChanges {
            text,
            group: self.group,
            image,
        })
    }
}

impl PostChanges {
    /// The group being assigned, if the update names one
    pub fn assigned_group(&self) -> Option<i64> {
        self.group.flatten()
    }
}
