// handlers/protected/auth/whoami.rs - GET /api/auth/whoami handler

use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /api/auth/whoami - identity carried by the caller's credential
///
/// Answers from the verified token alone; the database is not consulted.
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": {
            "userId": user.user_id,
            "email": user.email,
            "role": user.role
        }
    }))
}
