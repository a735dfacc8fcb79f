//! Test server helpers
//!
//! Builds the real router around a test database and wraps it in an
//! `axum_test::TestServer`.

use axum_test::TestServer;
use yatube_api::backend::server::init::create_app_with_pool;

use super::auth_helpers::test_config;
use super::database::TestDatabase;

/// Create a test server sharing `db`'s pool
pub fn create_test_server(db: &TestDatabase) -> TestServer {
    let app = create_app_with_pool(test_config(), db.pool().clone());
    TestServer::new(app).expect("Failed to create test server")
}
