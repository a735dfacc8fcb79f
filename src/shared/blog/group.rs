//! Group Data Structure
//!
//! Groups are thematic communities a post can be filed under. They are
//! read-only over the API and created through the library.

use serde::{Deserialize, Serialize};

use super::fields::clean_text;
use crate::shared::error::SharedError;

pub const TITLE_MAX_CHARS: usize = 200;
pub const SLUG_MAX_CHARS: usize = 50;

/// A group as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Fields for a group about to be created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl NewGroup {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }

    /// Check every field and return the trimmed group
    pub fn validate(&self) -> Result<NewGroup, SharedError> {
        let title = clean_text("title", &self.title)?;
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(SharedError::validation(
                "title",
                format!("Ensure this field has no more than {TITLE_MAX_CHARS} characters."),
            ));
        }

        let slug = self.slug.trim().to_string();
        if !is_valid_slug(&slug) {
            return Err(SharedError::validation(
                "slug",
                "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.",
            ));
        }

        let description = clean_text("description", &self.description)?;

        Ok(NewGroup {
            title,
            slug,
            description,
        })
    }
}

/// Slugs are 1-50 ASCII letters, digits, underscores or hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= SLUG_MAX_CHARS
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
