// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (verified credential) → Elevated (verified admin credential)

pub mod elevated;
pub mod protected;
pub mod public;

use crate::error::ApiError;

/// Parse an integer id from a path segment
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} id: {}", what, raw)))
}
