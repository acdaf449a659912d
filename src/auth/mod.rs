pub mod carrier;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

pub use carrier::{extract_cookie_token, extract_token, AUTH_TOKEN_COOKIE, TOKEN_COOKIE};

pub const ADMIN_ROLE: &str = "admin";

/// Identity carried inside a credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

impl TokenPayload {
    pub fn new(user_id: i64, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: i64,
    email: String,
    role: String,
    #[serde(default)]
    iat: i64,
    exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT generation error: {0}")]
    Generation(#[from] jsonwebtoken::errors::Error),
}

/// Signs and verifies HS256 credentials with a process-wide secret.
///
/// Built once from [`SecurityConfig`] and shared; never reads the
/// environment after construction.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(&security.jwt_secret, security.jwt_expiry)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a credential using the configured lifetime
    pub fn sign(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        self.sign_with_ttl(payload, self.ttl)
    }

    /// Sign a credential with an explicit lifetime. A negative lifetime
    /// produces an already-expired credential.
    pub fn sign_with_ttl(&self, payload: &TokenPayload, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user_id: payload.user_id,
            email: payload.email.clone(),
            role: payload.role.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify a credential. Malformed input, a bad signature and an elapsed
    /// expiry all collapse to `None`.
    pub fn verify(&self, token: &str) -> Option<TokenPayload> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(TokenPayload {
                user_id: data.claims.user_id,
                email: data.claims.email,
                role: data.claims.role,
            }),
            Err(e) => {
                tracing::debug!("Credential rejected: {}", e);
                None
            }
        }
    }
}
