// Credential carriers and their single precedence order:
//   Authorization: Bearer <token>  >  cookie `token`  >  cookie `auth_token`
// Every guard and the edge redirector go through this module.

use axum::http::{header, HeaderMap};

pub const TOKEN_COOKIE: &str = "token";

/// Legacy alias still written by older clients
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Cookie names in precedence order
pub const COOKIE_PRECEDENCE: [&str; 2] = [TOKEN_COOKIE, AUTH_TOKEN_COOKIE];

/// Extract the raw credential from a request, header first, then cookies.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    extract_bearer_token(headers).or_else(|| extract_cookie_token(headers))
}

/// Extract the raw credential from cookies only.
pub fn extract_cookie_token(headers: &HeaderMap) -> Option<String> {
    COOKIE_PRECEDENCE
        .iter()
        .find_map(|name| cookie_value(headers, name))
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Look up a cookie by exact name across every `Cookie` header
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| val.trim().to_string())
        })
        .find(|val| !val.is_empty())
}
