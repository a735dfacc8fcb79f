/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/v1/auth/me/, which returns
 * information about the currently authenticated user.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the request is anonymous or the token is invalid
/// * `404 Not Found` - If the user was deleted after the token was issued
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", user.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.into()))
}
