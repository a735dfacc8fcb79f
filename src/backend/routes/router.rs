/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * 1. API routes nested under `/api/v1`
 * 2. Authentication middleware (token → `AuthenticatedUser`)
 * 3. Request tracing
 * 4. JSON 404 fallback
 */

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::types::{BackendError, NOT_FOUND};
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Prefix of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new());

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(|| async { BackendError::not_found(NOT_FOUND) })
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
