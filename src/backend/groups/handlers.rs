//! Group HTTP Handlers

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::types::{BackendError, NOT_FOUND};
use crate::backend::extract::ApiPath;
use crate::shared::blog::Group;

/// `GET /groups/`
pub async fn list_groups(State(pool): State<SqlitePool>) -> Result<Json<Vec<Group>>, BackendError> {
    Ok(Json(db::list_groups(&pool).await?))
}

/// `GET /groups/{id}/`
pub async fn get_group(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Group>, BackendError> {
    db::get_group(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))
}
