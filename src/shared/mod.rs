//! Shared Module
//!
//! Types that describe the API surface independently of the server: JSON
//! bodies of every resource, field validation, pagination arithmetic, the
//! shared error type and the application configuration.

/// Blog resource representations and field rules
pub mod blog;

/// Limit/offset pagination
pub mod pagination;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use blog::{Comment, Follow, Group, Post};
pub use error::SharedError;
pub use pagination::{LimitOffset, Listing, Page, RequestUrl};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
