use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryStore, PgStore};
use crate::handlers::{elevated, protected, public};
use crate::middleware::{edge_redirect, require_admin, require_auth};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/auth/logout", post(public::logout))
        // Protected API
        .merge(protected_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .fallback(public::not_found)
        .with_state(state.clone())
        // Global middleware, outermost first: the edge gate runs before routing
        .layer(
            ServiceBuilder::new()
                .layer(from_fn_with_state(state.edge.clone(), edge_redirect))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/whoami", get(protected::whoami))
        .route("/api/skills/:id", delete(protected::skill_delete))
        .route_layer(from_fn_with_state(state, require_auth))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/admin/users/:id/toggle-status", put(elevated::toggle_status))
        .route_layer(from_fn_with_state(state, require_admin))
}

/// Which backing store the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Bind and serve until ctrl-c
pub async fn run(config: AppConfig, store: StoreKind) -> anyhow::Result<()> {
    config.report();

    let (state, pool) = match store {
        StoreKind::Postgres => {
            let pool = DatabaseManager::connect_lazy(&config.database)?;
            (AppState::new(&config, PgStore::new(pool.clone())), Some(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Running with the in-memory store; data is not persisted");
            (AppState::new(&config, MemoryStore::new()), None)
        }
    };

    let bind_addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Skill Portal API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        DatabaseManager::close(&pool).await;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
