//! HTTP: маршрутизация и состояние приложения.

pub mod device_routes;
pub mod request_log;
pub mod view_routes;

use crate::services::device_repository::{DeviceRepository, SeaOrmDeviceRepository};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Общее состояние приложения.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub devices: Arc<dyn DeviceRepository>,
}

impl AppState {
    /// Состояние с репозиторием sea-orm поверх соединения.
    pub fn new(db: DatabaseConnection) -> Self {
        let devices = Arc::new(SeaOrmDeviceRepository::new(db.clone()));
        Self { db, devices }
    }
}

/// Построить маршрутизатор Axum.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(device_routes::routes())
        .merge(view_routes::routes())
        .layer(axum::middleware::from_fn(request_log::log_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — проверка работоспособности сервера.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.db.execute_unprepared("SELECT 1").await.is_ok();
    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "error" },
        "database": db_ok,
        "service": "dcm-server"
    }))
}
