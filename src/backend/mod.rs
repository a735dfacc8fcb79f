//! Backend Module
//!
//! This module contains all server-side code for the Yatube API: an Axum
//! HTTP server over a SQLite database.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup, tokens, user management
//! - **`middleware`** - Bearer token authentication
//! - **`permissions`** - Author-or-read-only object permission
//! - **`posts`**, **`comments`**, **`groups`**, **`follows`** - Resources
//! - **`extract`** - Extractors that reject with `BackendError`
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── permissions.rs  - Object permissions
//! ├── posts/          - Posts (db + handlers)
//! ├── comments/       - Comments (db + handlers)
//! ├── groups/         - Groups (db + handlers)
//! ├── follows/        - Follows (db + handlers)
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `SqlitePool` and the `AppConfig`. Handlers extract
//! only the part they need through `FromRef`.
//!
//! # Request Flow
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. The auth middleware resolves a bearer token, if any
//! 3. The handler checks existence, then permission, then the body
//! 4. Errors become JSON responses through `BackendError`

pub mod auth;
pub mod comments;
pub mod error;
pub mod extract;
pub mod follows;
pub mod groups;
pub mod middleware;
pub mod permissions;
pub mod posts;
pub mod routes;
pub mod server;
