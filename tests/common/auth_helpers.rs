//! Authentication test helpers
//!
//! Provides utilities for creating test users and generating tokens.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::SqlitePool;
use uuid::Uuid;
use yatube_api::backend::auth::sessions::{create_token, Claims};
use yatube_api::backend::auth::users::create_user;
use yatube_api::shared::AppConfig;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "password123";

/// Configuration used by every test server
///
/// The minimum bcrypt cost keeps password hashing fast.
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Invalid test configuration")
}

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database with a valid token
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> TestUser {
    let config = test_config();
    let password_hash =
        bcrypt::hash(TEST_PASSWORD, config.bcrypt_cost).expect("Failed to hash password");
    let email = format!("{username}@example.com");

    let user = create_user(pool, username.to_string(), email, password_hash)
        .await
        .expect("Failed to create test user");

    let token =
        create_token(&config, user.id, &user.username).expect("Failed to create test token");

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}

/// A correctly signed token that expired an hour ago
pub fn create_expired_token(user_id: Uuid, username: &str) -> String {
    let now = Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode token")
}
