#![allow(dead_code)]

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Duration;

use skill_portal_api::auth::{TokenCodec, TokenPayload};
use skill_portal_api::config::AppConfig;
use skill_portal_api::database::{
    DatabaseError, HealthCheck, MemoryStore, SkillRepository, UserRepository, UserStatus,
};
use skill_portal_api::server::app;
use skill_portal_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer<S = MemoryStore> {
    pub port: u16,
    pub base_url: String,
    pub store: S,
    pub codec: TokenCodec,
    pub client: reqwest::Client,
}

impl<S> TestServer<S> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign a credential the server will accept
    pub fn token(&self, user_id: i64, role: &str) -> String {
        let payload = TokenPayload::new(user_id, format!("user{}@example.com", user_id), role);
        self.codec.sign(&payload).expect("sign test token")
    }

    pub fn expired_token(&self, user_id: i64, role: &str) -> String {
        let payload = TokenPayload::new(user_id, format!("user{}@example.com", user_id), role);
        self.codec
            .sign_with_ttl(&payload, Duration::hours(-1))
            .expect("sign expired test token")
    }

    /// Sign with a secret the server does not know
    pub fn foreign_token(&self, user_id: i64, role: &str) -> String {
        let payload = TokenPayload::new(user_id, format!("user{}@example.com", user_id), role);
        TokenCodec::new("some-other-secret", Duration::hours(1))
            .sign(&payload)
            .expect("sign foreign test token")
    }
}

/// Store whose every call fails the way an unreachable Postgres would
#[derive(Clone, Default)]
pub struct FailingStore;

fn backend_down() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn set_active(&self, _id: i64, _is_active: bool) -> Result<Option<UserStatus>, DatabaseError> {
        Err(backend_down())
    }
}

#[async_trait]
impl SkillRepository for FailingStore {
    async fn delete_owned(&self, _user_id: i64, _skill_id: i64) -> Result<bool, DatabaseError> {
        Err(backend_down())
    }
}

#[async_trait]
impl HealthCheck for FailingStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(backend_down())
    }
}

/// Start the router in-process on a free port, backed by a fresh in-memory store.
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(MemoryStore::new()).await
}

/// Start the router in-process on a free port, backed by `store`.
pub async fn spawn_server_with<S>(store: S) -> Result<TestServer<S>>
where
    S: UserRepository + SkillRepository + HealthCheck + Clone + 'static,
{
    let config = AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        _ => None,
    })?;

    let state = AppState::new(&config, store.clone());

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind test port {}", port))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app(state)).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    // Redirects are asserted on, never followed
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
        store,
        codec: TokenCodec::from_config(&config.security),
        client,
    })
}
