use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{extract_token, TokenCodec, TokenPayload};
use crate::error::{ApiError, AuthError};
use crate::state::AppState;

/// Strength required by a protected route. Both levels fully verify the
/// credential; `Admin` additionally requires the admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

/// Authenticated user context extracted from a verified credential
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

impl From<TokenPayload> for AuthUser {
    fn from(payload: TokenPayload) -> Self {
        Self {
            user_id: payload.user_id,
            email: payload.email,
            role: payload.role,
        }
    }
}

/// Route guard: extract, verify, then check the role.
pub fn authorize(headers: &HeaderMap, codec: &TokenCodec, access: Access) -> Result<AuthUser, AuthError> {
    let token = extract_token(headers).ok_or(AuthError::Unauthenticated)?;
    let payload = codec.verify(&token).ok_or(AuthError::InvalidCredential)?;

    if access == Access::Admin && !payload.is_admin() {
        tracing::warn!(
            "Admin access denied for user {} with role '{}'",
            payload.user_id,
            payload.role
        );
        return Err(AuthError::Forbidden);
    }

    Ok(AuthUser::from(payload))
}

async fn guard(state: AppState, access: Access, mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_user = authorize(request.headers(), &state.codec, access).map_err(|err| {
        tracing::debug!("{} {} rejected: {}", request.method(), request.uri().path(), err);
        ApiError::from(err)
    })?;

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Middleware for routes open to any authenticated user
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, ApiError> {
    guard(state, Access::Authenticated, request, next).await
}

/// Middleware for admin-only routes
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, ApiError> {
    guard(state, Access::Admin, request, next).await
}
