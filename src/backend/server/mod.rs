//! Server Module
//!
//! Startup plumbing for the backend server.
//!
//! # Module Organization
//!
//! - **`config`** - Database connection and migrations
//! - **`state`** - `AppState` and its `FromRef` impls
//! - **`init`** - Application assembly (`create_app`)

pub mod config;
pub mod init;
pub mod state;

pub use init::{create_app, create_app_with_pool};
pub use state::AppState;
