//! Follow Data Structure
//!
//! A follow is a directed subscription from one user to another. A user may
//! not follow themselves and may follow a given author only once.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::REQUIRED;
use crate::shared::error::SharedError;

pub const SELF_FOLLOW: &str = "You cannot follow yourself.";
pub const DUPLICATE_FOLLOW: &str = "You are already following this author.";

/// A follow as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Follow {
    pub id: i64,
    /// Username of the follower
    pub user: String,
    /// Username of the followed author
    pub following: String,
}

/// Body of `POST /follow/`
///
/// `user` is read-only: the follower is always the requester.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFollowRequest {
    #[serde(default)]
    pub following: Option<String>,
}

impl CreateFollowRequest {
    /// Username of the author to follow
    pub fn following_username(&self) -> Result<&str, SharedError> {
        self.following
            .as_deref()
            .ok_or_else(|| SharedError::validation("following", REQUIRED))
    }
}

/// Error for a `following` username that matches no user
pub fn unknown_user(username: &str) -> SharedError {
    SharedError::validation(
        "following",
        format!("Object with username={username} does not exist."),
    )
}

/// Reject a follow from a user to themselves
pub fn ensure_not_self(user_id: Uuid, following_id: Uuid) -> Result<(), SharedError> {
    if user_id == following_id {
        return Err(SharedError::validation("following", SELF_FOLLOW));
    }
    Ok(())
}

/// Error for a (user, following) pair that already exists
pub fn duplicate_follow() -> SharedError {
    SharedError::non_field(DUPLICATE_FOLLOW)
}

/// Query string of `GET /follow/`
///
/// A repeated `search` parameter keeps its last value; other parameters are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct FollowSearch {
    pub search: Option<String>,
}

impl From<Vec<(String, String)>> for FollowSearch {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let search = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Self { search }
    }
}

impl FollowSearch {
    /// Search terms: the query split on whitespace and commas
    pub fn terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .unwrap_or_default()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Whether a followed username satisfies every search term
    pub fn matches(&self, following_username: &str) -> bool {
        let username = following_username.to_lowercase();
        self.terms().iter().all(|term| username.contains(term.as_str()))
    }
}
