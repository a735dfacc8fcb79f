//! Follows Module
//!
//! Subscriptions of the requesting user to other authors.

pub mod db;
pub mod handlers;

pub use handlers::{create_follow, list_follows};
