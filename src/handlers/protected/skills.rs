use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// DELETE /api/skills/:id - remove a skill from the caller's own profile
///
/// Scoped to the caller's user id; another user's skill row is reported as 404.
pub async fn skill_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let skill_id = parse_id(&id, "skill")?;

    if !state.skills.delete_owned(user.user_id, skill_id).await? {
        return Err(ApiError::not_found("Skill not found"));
    }

    tracing::debug!("User {} removed skill {}", user.user_id, skill_id);
    Ok(Json(json!({ "success": true })))
}
