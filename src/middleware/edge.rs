//! Edge redirector.
//!
//! A presence-only gate that runs before routing: browser navigations to a
//! protected page prefix without any credential cookie are sent to the login
//! page. It never verifies the credential. API protection is the job of the
//! route guard in [`super::auth`], which always performs full verification.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::extract_cookie_token;
use crate::config::EdgeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeDecision {
    Pass,
    Redirect(String),
}

#[derive(Debug, Clone)]
pub struct EdgeGate {
    protected_prefixes: Vec<String>,
    login_path: String,
}

impl EdgeGate {
    pub fn new(config: &EdgeConfig) -> Self {
        Self {
            protected_prefixes: config.protected_prefixes.clone(),
            login_path: config.login_path.clone(),
        }
    }

    /// Segment-aware prefix match: `/app` covers `/app` and `/app/...`
    /// but not `/application`.
    pub fn is_protected(&self, path: &str) -> bool {
        if path == self.login_path {
            return false;
        }
        self.protected_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    /// Presence check only: any value in a credential cookie passes.
    pub fn has_credential_cookie(headers: &HeaderMap) -> bool {
        extract_cookie_token(headers).is_some()
    }

    pub fn decide(&self, path: &str, headers: &HeaderMap) -> EdgeDecision {
        if self.is_protected(path) && !Self::has_credential_cookie(headers) {
            EdgeDecision::Redirect(self.login_path.clone())
        } else {
            EdgeDecision::Pass
        }
    }
}

pub async fn edge_redirect(State(gate): State<Arc<EdgeGate>>, request: Request, next: Next) -> Response {
    match gate.decide(request.uri().path(), request.headers()) {
        EdgeDecision::Pass => next.run(request).await,
        EdgeDecision::Redirect(target) => {
            tracing::debug!("Redirecting anonymous navigation {} to {}", request.uri().path(), target);
            Redirect::temporary(&target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    fn gate() -> EdgeGate {
        EdgeGate::new(&EdgeConfig::default())
    }

    fn cookies(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn anonymous_dashboard_redirects_to_login() {
        assert_eq!(
            gate().decide("/app/dashboard", &HeaderMap::new()),
            EdgeDecision::Redirect("/auth/login".to_string())
        );
        assert_eq!(
            gate().decide("/admin", &HeaderMap::new()),
            EdgeDecision::Redirect("/auth/login".to_string())
        );
    }

    #[test]
    fn any_cookie_value_passes_without_verification() {
        assert_eq!(gate().decide("/app/dashboard", &cookies("token=garbage")), EdgeDecision::Pass);
        assert_eq!(gate().decide("/app/dashboard", &cookies("auth_token=x")), EdgeDecision::Pass);
    }

    #[test]
    fn bearer_header_alone_does_not_pass() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert!(matches!(gate().decide("/app", &headers), EdgeDecision::Redirect(_)));
    }

    #[test]
    fn unprotected_paths_pass() {
        let gate = gate();
        assert_eq!(gate.decide("/", &HeaderMap::new()), EdgeDecision::Pass);
        assert_eq!(gate.decide("/application", &HeaderMap::new()), EdgeDecision::Pass);
        assert_eq!(gate.decide("/api/admin/users/1/toggle-status", &HeaderMap::new()), EdgeDecision::Pass);
        assert_eq!(gate.decide("/auth/login", &HeaderMap::new()), EdgeDecision::Pass);
    }

    #[test]
    fn login_path_inside_protected_prefix_is_exempt() {
        let gate = EdgeGate::new(&EdgeConfig {
            protected_prefixes: vec!["/app".to_string()],
            login_path: "/app/login".to_string(),
        });
        assert_eq!(gate.decide("/app/login", &HeaderMap::new()), EdgeDecision::Pass);
        assert!(matches!(gate.decide("/app/home", &HeaderMap::new()), EdgeDecision::Redirect(_)));
    }
}
