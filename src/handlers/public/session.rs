use axum::{
    http::{
        header::{InvalidHeaderValue, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::carrier::COOKIE_PRECEDENCE;

/// POST /api/auth/logout - clear the session cookies
///
/// Credentials are stateless, so a token copied elsewhere stays valid until
/// it expires. Only the browser's copies are removed here.
pub async fn logout() -> Response {
    let mut headers = HeaderMap::new();
    for name in COOKIE_PRECEDENCE {
        match clear_cookie(name) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Failed to build clearing cookie for {}: {}", name, e),
        }
    }

    (StatusCode::OK, headers, Json(json!({ "success": true }))).into_response()
}

fn clear_cookie(name: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logout_expires_both_cookies() {
        let response = logout().await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookies: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("token=;"));
        assert!(cookies[1].starts_with("auth_token=;"));
        assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
    }
}
