//! JSON API устройств: список, получение, создание, удаление, поиск.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::search::{search_devices, UnknownField};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use dcm_entities::devices::{DeviceInput, Model};
use serde::Deserialize;

/// Параметры поиска `?field=..&value=..`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub field: String,
    pub value: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(list_devices).post(create_device))
        .route("/devices/search", get(search))
        .route("/devices/{id}", get(get_device).delete(delete_device))
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /devices — все устройства.
async fn list_devices(State(state): State<AppState>) -> Result<Json<Vec<Model>>, AppError> {
    Ok(Json(state.devices.list_all().await?))
}

/// GET /devices/{id} — устройство по id, 404 если нет.
async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Model>, AppError> {
    state
        .devices
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Устройство не найдено: {id}")))
}

/// POST /devices — создать или заменить устройство.
async fn create_device(
    State(state): State<AppState>,
    Json(device): Json<DeviceInput>,
) -> Result<Json<Model>, AppError> {
    let saved = state.devices.save(device).await?;
    tracing::info!("Сохранено устройство {}", saved.id);
    Ok(Json(saved))
}

/// DELETE /devices/{id} — 204 если удалено, 404 если не было.
async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.devices.exists_by_id(id).await? {
        return Err(AppError::NotFound(format!("Устройство не найдено: {id}")));
    }

    state.devices.delete_by_id(id).await?;
    tracing::info!("Удалено устройство {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /devices/search — поиск по полю, 400 на неизвестное поле.
async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<Model>>, AppError> {
    let devices =
        search_devices(state.devices.as_ref(), &q.field, &q.value, UnknownField::Reject).await?;
    Ok(Json(devices))
}
