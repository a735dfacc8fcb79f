//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token authentication and the `AuthUser` extractor

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
