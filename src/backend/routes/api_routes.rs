/**
 * API Route Handlers
 *
 * This module maps the `/api/v1` endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup/` - User registration
 * - `GET /auth/me/` - Current user info (requires authentication)
 * - `POST /jwt/create/` - Obtain a token
 * - `POST /jwt/verify/` - Check a token
 *
 * ## Resources
 * - `GET|POST /posts/`, `GET|PUT|PATCH|DELETE /posts/{id}/`
 * - `GET|POST /posts/{post_id}/comments/`,
 *   `GET|PUT|PATCH|DELETE /posts/{post_id}/comments/{id}/`
 * - `GET /groups/`, `GET /groups/{id}/`
 * - `GET|POST /follow/`
 */

use axum::{routing::get, routing::post, Router};

use crate::backend::auth::{get_me, login, signup, verify};
use crate::backend::comments::{
    create_comment, delete_comment, get_comment, list_comments, update_comment,
};
use crate::backend::follows::{create_follow, list_follows};
use crate::backend::groups::{get_group, list_groups};
use crate::backend::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Write endpoints resolve the requester with the `AuthUser` extractor; the
/// authentication middleware itself never turns anonymous requests away.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/auth/signup/", post(signup))
        .route("/auth/me/", get(get_me))
        .route("/jwt/create/", post(login))
        .route("/jwt/verify/", post(verify))
        // Posts
        .route("/posts/", get(list_posts).post(create_post))
        .route(
            "/posts/{id}/",
            get(get_post)
                .put(update_post)
                .patch(update_post)
                .delete(delete_post),
        )
        // Comments
        .route(
            "/posts/{post_id}/comments/",
            get(list_comments).post(create_comment),
        )
        .route(
            "/posts/{post_id}/comments/{id}/",
            get(get_comment)
                .put(update_comment)
                .patch(update_comment)
                .delete(delete_comment),
        )
        // Groups (read-only)
        .route("/groups/", get(list_groups))
        .route("/groups/{id}/", get(get_group))
        // Follows
        .route("/follow/", get(list_follows).post(create_follow))
}
