//! Author-or-read-only permission
//!
//! Anyone may read a resource. Only its author may change or delete it.
//! Handlers look the object up first, so a missing object is a 404 for
//! everybody, and only then ask for permission.

use axum::http::Method;
use uuid::Uuid;

use crate::backend::error::types::{BackendError, NOT_AUTHENTICATED, PERMISSION_DENIED};
use crate::backend::middleware::AuthenticatedUser;

/// Resources that record who created them
pub trait Authored {
    fn author_id(&self) -> Uuid;
}

/// GET, HEAD and OPTIONS never modify anything
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Whether `user` may perform `method` on `obj`
pub fn has_object_permission<T: Authored>(
    method: &Method,
    user: Option<&AuthenticatedUser>,
    obj: &T,
) -> bool {
    is_safe_method(method) || user.is_some_and(|user| user.user_id == obj.author_id())
}

/// Like `has_object_permission`, but explains a refusal
///
/// Anonymous requests get 401, authenticated non-authors get 403.
pub fn ensure_object_permission<T: Authored>(
    method: &Method,
    user: Option<&AuthenticatedUser>,
    obj: &T,
) -> Result<(), BackendError> {
    if has_object_permission(method, user, obj) {
        return Ok(());
    }
    match user {
        None => Err(BackendError::unauthorized(NOT_AUTHENTICATED)),
        Some(user) => {
            tracing::warn!(
                "{} {} refused: {} is not the author",
                method,
                std::any::type_name::<T>().rsplit("::").next().unwrap_or_default(),
                user.username
            );
            Err(BackendError::forbidden(PERMISSION_DENIED))
        }
    }
}
