//! Route Configuration Module
//!
//! - **`router`** - Top-level router, middleware and fallback
//! - **`api_routes`** - `/api/v1` endpoint table

pub mod api_routes;
pub mod router;

pub use router::create_router;
