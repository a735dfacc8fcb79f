//! Yatube API - Main Library
//!
//! A small blogging HTTP API: posts, comments, groups and follow
//! relationships, with author-only writes and JWT authentication.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the server
//!   - Request/response bodies and their field rules
//!   - Limit/offset pagination
//!   - Error and configuration types
//!
//! - **`backend`** - The Axum server
//!   - Server initialization, state and database pool
//!   - Authentication (users, JWT sessions, middleware)
//!   - Per-resource database access and HTTP handlers
//!   - Route assembly and HTTP error conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use yatube_api::backend::server::init::create_app;
//! use yatube_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod shared;
