//! Groups Module
//!
//! Communities a post may belong to. Groups are read-only over HTTP;
//! they are created through [`db::create_group`].

pub mod db;
pub mod handlers;

pub use handlers::{get_group, list_groups};
