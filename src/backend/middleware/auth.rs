/**
 * Authentication Middleware
 *
 * This module authenticates requests that carry an `Authorization: Bearer`
 * header and exposes the result to handlers through the `AuthUser`
 * extractor.
 *
 * Requests without the header pass through anonymously: reads are public and
 * handlers that write ask for `AuthUser` themselves. A header that is present
 * but unusable is rejected with 401 on every route.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::get_user_id_from_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::types::{BackendError, NOT_AUTHENTICATED};
use crate::backend::server::state::AppState;

const INVALID_TOKEN: &str = "Given token not valid for any token type";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header, if any
/// 2. Verifies the token
/// 3. Checks that the user still exists
/// 4. Attaches user data to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized(INVALID_TOKEN)
        })?;

    let user_id = get_user_id_from_token(&app_state.config, token).map_err(|e| {
        tracing::warn!("{}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    let username = find_username(&app_state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token refers to missing user: {}", user_id);
            BackendError::unauthorized("User not found")
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id, username });

    Ok(next.run(request).await)
}

/// Current username of a user, `None` if the user no longer exists
async fn find_username(pool: &SqlitePool, user_id: Uuid) -> Result<Option<String>, sqlx::Error> {
    Ok(get_user_by_id(pool, user_id).await?.map(|user| user.username))
}

/// Axum extractor for authenticated user
///
/// As `AuthUser` it rejects anonymous requests with 401; as
/// `Option<AuthUser>` it lets handlers decide.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized(NOT_AUTHENTICATED))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AuthenticatedUser>().cloned().map(AuthUser))
    }
}
