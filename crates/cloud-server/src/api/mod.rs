//! HTTP API: маршрутизация и состояние приложения.

pub mod middleware;
pub mod server_routes;
pub mod vm_routes;

use crate::services::{server_service, vm_service};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use middleware::{AccessPolicy, AllowAll};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Общее состояние приложения.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub policy: Arc<dyn AccessPolicy>,
}

impl AppState {
    /// Состояние с открытым доступом.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            policy: Arc::new(AllowAll),
        }
    }

    pub fn with_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.policy = policy;
        self
    }
}

/// Построить маршрутизатор Axum.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(vm_routes::routes())
        .merge(server_routes::routes());

    Router::new()
        .route("/health", get(health_check))
        .route("/health/", get(health_check))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — проверка работоспособности и число записей.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.db.execute_unprepared("SELECT 1").await.is_ok();
    let servers = server_service::count_servers(&state.db).await.ok();
    let vms = vm_service::count_vms(&state.db).await.ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "error" },
        "database": db_ok,
        "servers": servers,
        "vms": vms,
        "service": "cloud-server"
    }))
}
