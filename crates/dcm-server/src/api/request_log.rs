//! Журнал входящих запросов: метод, путь и адрес клиента.

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;

/// Middleware: записать запрос в лог и передать дальше без изменений.
pub async fn log_request(req: Request, next: Next) -> Response {
    let remote_addr = remote_addr(&req);
    tracing::info!(
        method = %req.method(),
        path = %req.uri().path(),
        remote_addr = %remote_addr,
        "Входящий запрос"
    );
    next.run(req).await
}

/// Адрес сокета клиента, если сервер запущен с ConnectInfo.
pub fn remote_addr<B>(req: &axum::http::Request<B>) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
