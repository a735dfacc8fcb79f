//! Post HTTP Handlers
//!
//! Mutating handlers resolve the post first, then check that the requester
//! is its author, and only then look at the body. A missing post is
//! therefore a 404 for everyone and a bad body from a stranger is a 403.

use axum::{
    extract::{OriginalUri, RawQuery, State},
    http::{header::HOST, HeaderMap, Method, StatusCode},
    Json,
};
use sqlx::SqlitePool;

use super::db::{self, PostRow};
use crate::backend::error::types::{BackendError, NOT_FOUND};
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::groups::db::group_exists;
use crate::backend::middleware::AuthUser;
use crate::backend::permissions::ensure_object_permission;
use crate::shared::blog::{Post, PostPayload};
use crate::shared::{LimitOffset, Listing, RequestUrl};

async fn find_post(pool: &SqlitePool, id: i64) -> Result<PostRow, BackendError> {
    db::get_post(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))
}

/// Reject a group id that matches no group
async fn ensure_group_exists(pool: &SqlitePool, group: Option<i64>) -> Result<(), BackendError> {
    if let Some(id) = group {
        if !group_exists(pool, id).await? {
            return Err(BackendError::validation(
                "group",
                format!("Invalid pk \"{id}\" - object does not exist."),
            ));
        }
    }
    Ok(())
}

/// `GET /posts/`
///
/// A plain array, or a page when `?limit=` is given.
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Json<Listing<Post>>, BackendError> {
    let Some(window) = LimitOffset::from_query(query.as_deref()) else {
        let posts = db::list_posts(&pool, None).await?;
        return Ok(Json(Listing::Plain(posts.into_iter().map(Post::from).collect())));
    };

    let count = db::count_posts(&pool).await?;
    let posts = db::list_posts(&pool, Some(window)).await?;

    let host = headers.get(HOST).and_then(|value| value.to_str().ok());
    let url = RequestUrl::from_parts(host, uri.path(), query);
    let results = posts.into_iter().map(Post::from).collect();

    Ok(Json(Listing::Paged(window.page(&url, count, results))))
}

/// `POST /posts/`
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(payload): ApiJson<PostPayload>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let post = payload.into_new_post()?;
    ensure_group_exists(&pool, post.group).await?;

    let row = db::create_post(&pool, user.user_id, &post).await?;
    tracing::info!("Post {} created by {}", row.id, user.username);

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// `GET /posts/{id}/`
pub async fn get_post(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(find_post(&pool, id).await?.into()))
}

/// `PUT /posts/{id}/` and `PATCH /posts/{id}/`
pub async fn update_post(
    method: Method,
    State(pool): State<SqlitePool>,
    user: Option<AuthUser>,
    ApiPath(id): ApiPath<i64>,
    payload: Result<ApiJson<PostPayload>, BackendError>,
) -> Result<Json<Post>, BackendError> {
    let current = find_post(&pool, id).await?;
    let user = user.map(|AuthUser(user)| user);
    ensure_object_permission(&method, user.as_ref(), &current)?;

    let ApiJson(payload) = payload?;
    let changes = payload.into_changes(method == Method::PATCH)?;
    ensure_group_exists(&pool, changes.assigned_group()).await?;

    let updated = db::update_post(&pool, current, changes).await?;
    tracing::info!("Post {} updated", updated.id);

    Ok(Json(updated.into()))
}

/// `DELETE /posts/{id}/`
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    user: Option<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, BackendError> {
    let current = find_post(&pool, id).await?;
    let user = user.map(|AuthUser(user)| user);
    ensure_object_permission(&Method::DELETE, user.as_ref(), &current)?;

    db::delete_post(&pool, current.id).await?;
    tracing::info!("Post {} deleted", current.id);

    Ok(StatusCode::NO_CONTENT)
}
