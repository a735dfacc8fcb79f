//! Comment HTTP Handlers
//!
//! The parent post is resolved first on every route. Mutations then follow
//! the same order as posts: 404, permission, validation.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    Json,
};
use sqlx::SqlitePool;

use super::db::{self, CommentRow};
use crate::backend::error::types::{BackendError, NOT_FOUND};
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::permissions::ensure_object_permission;
use crate::backend::posts::db::get_post;
use crate::shared::blog::{Comment, CommentPayload};

async fn ensure_post_exists(pool: &SqlitePool, post_id: i64) -> Result<(), BackendError> {
    match get_post(pool, post_id).await? {
        Some(_) => Ok(()),
        None => Err(BackendError::not_found(NOT_FOUND)),
    }
}

async fn find_comment(pool: &SqlitePool, post_id: i64, id: i64) -> Result<CommentRow, BackendError> {
    ensure_post_exists(pool, post_id).await?;
    db::get_comment(pool, post_id, id)
        .await?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))
}

/// `GET /posts/{post_id}/comments/`
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    ensure_post_exists(&pool, post_id).await?;
    let comments = db::list_comments(&pool, post_id).await?;
    Ok(Json(comments.into_iter().map(Comment::from).collect()))
}

/// `POST /posts/{post_id}/comments/`
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiPath(post_id): ApiPath<i64>,
    payload: Result<ApiJson<CommentPayload>, BackendError>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    ensure_post_exists(&pool, post_id).await?;

    let ApiJson(payload) = payload?;
    let text = payload.into_text(false)?.unwrap_or_default();

    let row = db::create_comment(&pool, post_id, user.user_id, &text).await?;
    tracing::info!("Comment {} on post {} by {}", row.id, post_id, user.username);

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// `GET /posts/{post_id}/comments/{id}/`
pub async fn get_comment(
    State(pool): State<SqlitePool>,
    ApiPath((post_id, id)): ApiPath<(i64, i64)>,
) -> Result<Json<Comment>, BackendError> {
    Ok(Json(find_comment(&pool, post_id, id).await?.into()))
}

/// `PUT` and `PATCH /posts/{post_id}/comments/{id}/`
pub async fn update_comment(
    method: Method,
    State(pool): State<SqlitePool>,
    user: Option<AuthUser>,
    ApiPath((post_id, id)): ApiPath<(i64, i64)>,
    payload: Result<ApiJson<CommentPayload>, BackendError>,
) -> Result<Json<Comment>, BackendError> {
    let current = find_comment(&pool, post_id, id).await?;
    let user = user.map(|AuthUser(user)| user);
    ensure_object_permission(&method, user.as_ref(), &current)?;

    let ApiJson(payload) = payload?;
    let updated = match payload.into_text(method == Method::PATCH)? {
        Some(text) => db::update_comment_text(&pool, current, &text).await?,
        None => current,
    };

    Ok(Json(updated.into()))
}

/// `DELETE /posts/{post_id}/comments/{id}/`
pub async fn delete_comment(
    State(pool): State<SqlitePool>,
    user: Option<AuthUser>,
    ApiPath((post_id, id)): ApiPath<(i64, i64)>,
) -> Result<StatusCode, BackendError> {
    let current = find_comment(&pool, post_id, id).await?;
    let user = user.map(|AuthUser(user)| user);
    ensure_object_permission(&Method::DELETE, user.as_ref(), &current)?;

    db::delete_comment(&pool, current.id).await?;
    tracing::info!("Comment {} deleted", current.id);

    Ok(StatusCode::NO_CONTENT)
}
