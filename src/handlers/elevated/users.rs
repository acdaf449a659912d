use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToggleStatusRequest {
    pub is_active: bool,
}

/// PUT /api/admin/users/:id/toggle-status - activate or deactivate a user
///
/// Expected Input:
/// ```json
/// { "is_active": false }
/// ```
///
/// Expected Output:
/// ```json
/// { "success": true, "user": { "id": 7, "email": "user@example.com", "is_active": false } }
/// ```
pub async fn toggle_status(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<ToggleStatusRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_id(&id, "user")?;
    let Json(payload) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let user = state
        .users
        .set_active(user_id, payload.is_active)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!(
        "Admin {} set user {} is_active={}",
        admin.user_id,
        user.id,
        user.is_active
    );

    Ok(Json(json!({
        "success": true,
        "user": user
    })))
}
