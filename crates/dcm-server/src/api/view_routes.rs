//! HTML-представление устройств. Изменения отвечают редиректом на список.

use crate::api::device_routes::SearchQuery;
use crate::api::AppState;
use crate::error::AppError;
use crate::services::search::{search_devices, UnknownField};
use crate::view::{render_devices_page, DevicesView};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use dcm_entities::devices::DeviceInput;

/// Путь страницы списка, на него ведут все редиректы.
pub const LIST_PATH: &str = "/devices/view";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(view_devices))
        .route("/devices/view/add", post(add_device))
        .route("/devices/view/search", get(search))
        .route("/devices/view/delete/{id}", post(delete_device))
}

/// GET /devices/view — страница со всеми устройствами.
async fn view_devices(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let devices = state.devices.list_all().await?;
    Ok(Html(render_devices_page(&DevicesView { devices })))
}

/// POST /devices/view/add — сохранить устройство из формы.
async fn add_device(
    State(state): State<AppState>,
    Form(device): Form<DeviceInput>,
) -> Result<Response, AppError> {
    let saved = state.devices.save(device).await?;
    tracing::info!("Сохранено устройство {} (форма)", saved.id);
    Ok(redirect_to_list())
}

/// GET /devices/view/search — неизвестное поле показывает весь список.
async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let devices =
        search_devices(state.devices.as_ref(), &q.field, &q.value, UnknownField::ListAll).await?;
    Ok(Html(render_devices_page(&DevicesView { devices })))
}

/// POST /devices/view/delete/{id} — удаление без проверки существования.
async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if state.devices.delete_by_id(id).await? {
        tracing::info!("Удалено устройство {id} (форма)");
    }
    Ok(redirect_to_list())
}

/// 302 Found на страницу списка.
fn redirect_to_list() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LIST_PATH)]).into_response()
}
