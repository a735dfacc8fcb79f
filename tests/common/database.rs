//! Database test fixtures and utilities
//!
//! Every fixture owns a fresh in-memory SQLite database, so tests are
//! isolated without any cleanup.

use sqlx::SqlitePool;
use uuid::Uuid;
use yatube_api::backend::groups::db::create_group;
use yatube_api::backend::posts::db::{create_post, PostRow};
use yatube_api::backend::server::config::connect_in_memory;
use yatube_api::shared::blog::post::NewPost;
use yatube_api::shared::blog::{Group, NewGroup};

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of rows in `table`
    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows");
        count
    }
}

/// Create a group with a slug derived from its title
pub async fn create_test_group(pool: &SqlitePool, title: &str) -> Group {
    let slug = title.to_lowercase().replace(' ', "-");
    create_group(pool, NewGroup::new(title, slug, format!("About {title}")))
        .await
        .expect("Failed to create test group")
}

/// Create a post without going through HTTP
pub async fn create_test_post(pool: &SqlitePool, author_id: Uuid, text: &str) -> PostRow {
    let post = NewPost {
        text: text.to_string(),
        group: None,
        image: None,
    };
    create_post(pool, author_id, &post)
        .await
        .expect("Failed to create test post")
}
