/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Build the application state
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Yatube API server");

    let db_pool = load_database(&config.database_url).await?;

    Ok(create_app_with_pool(config, db_pool))
}

/// Build the application around an existing pool
///
/// Used by tests, which bring their own in-memory database.
pub fn create_app_with_pool(config: AppConfig, db_pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}
