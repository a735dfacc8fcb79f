//! Comments Module
//!
//! Comments nested under a post. Every route checks that the addressed
//! comment belongs to the post in the path.

pub mod db;
pub mod handlers;

pub use handlers::{create_comment, delete_comment, get_comment, list_comments, update_comment};
