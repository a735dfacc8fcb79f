//! Follow HTTP Handlers
//!
//! Both routes require authentication and only ever touch the requester's
//! own follows.

use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::backend::middleware::AuthUser;
use crate::shared::blog::follow::{
    duplicate_follow, ensure_not_self, unknown_user, SELF_FOLLOW,
};
use crate::shared::blog::{CreateFollowRequest, Follow, FollowSearch};

/// `GET /follow/?search=`
pub async fn list_follows(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiQuery(search): ApiQuery<FollowSearch>,
) -> Result<Json<Vec<Follow>>, BackendError> {
    let follows = db::list_follows(&pool, user.user_id).await?;

    Ok(Json(
        follows
            .into_iter()
            .filter(|follow| search.matches(&follow.following))
            .collect(),
    ))
}

/// `POST /follow/`
pub async fn create_follow(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateFollowRequest>,
) -> Result<(StatusCode, Json<Follow>), BackendError> {
    let username = request.following_username()?;
    let author = get_user_by_username(&pool, username)
        .await?
        .ok_or_else(|| unknown_user(username))?;

    ensure_not_self(user.user_id, author.id)?;
    if db::follow_exists(&pool, user.user_id, author.id).await? {
        return Err(duplicate_follow().into());
    }

    let follow = match db::create_follow(&pool, user.user_id, author.id).await {
        Ok(follow) => follow,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(duplicate_follow().into())
        }
        Err(sqlx::Error::Database(e)) if e.is_check_violation() => {
            return Err(BackendError::validation("following", SELF_FOLLOW))
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("{} now follows {}", follow.user, follow.following);
    Ok((StatusCode::CREATED, Json(follow)))
}
