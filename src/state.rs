use std::sync::Arc;

use crate::auth::TokenCodec;
use crate::config::AppConfig;
use crate::database::{HealthCheck, SkillRepository, UserRepository};
use crate::middleware::EdgeGate;

/// Shared, read-only application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub codec: Arc<TokenCodec>,
    pub edge: Arc<EdgeGate>,
    pub users: Arc<dyn UserRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new<S>(config: &AppConfig, store: S) -> Self
    where
        S: UserRepository + SkillRepository + HealthCheck + 'static,
    {
        let store = Arc::new(store);
        Self {
            codec: Arc::new(TokenCodec::from_config(&config.security)),
            edge: Arc::new(EdgeGate::new(&config.edge)),
            users: store.clone(),
            skills: store.clone(),
            health: store,
        }
    }
}
