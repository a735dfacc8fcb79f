/**
 * Token Verification Handler
 *
 * POST /api/v1/jwt/verify/ answers 200 with an empty object for a valid
 * token and 401 otherwise.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::VerifyRequest;
use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::shared::AppConfig;

pub async fn verify(
    State(config): State<Arc<AppConfig>>,
    ApiJson(request): ApiJson<VerifyRequest>,
) -> Result<Json<serde_json::Value>, BackendError> {
    verify_token(&config, &request.token).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        BackendError::unauthorized("Token is invalid or expired")
    })?;

    Ok(Json(serde_json::json!({})))
}
