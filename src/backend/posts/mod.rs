//! Posts Module
//!
//! Publicly readable posts that only their author may edit or delete.
//!
//! - **`db`** - Queries over the `posts` table
//! - **`handlers`** - HTTP handlers for `/posts/` and `/posts/{id}/`

pub mod db;
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
