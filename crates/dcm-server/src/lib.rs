//! Сервер инвентаря устройств: JSON API и HTML-представление.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod view;


use api::AppState;
use axum::Router;
use config::ServerConfig;
use dcm_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Запустить сервер инвентаря.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Маршрутизатор
    let app = api::build_router(AppState::new(db));

    // 4. Graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 5. Запуск сервера
    serve(&config, app, shutdown_rx).await?;

    info!("Сервер инвентаря остановлен");
    Ok(())
}

/// HTTP-сервер с адресом клиента в ConnectInfo.
async fn serve(
    config: &ServerConfig,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Сервер инвентаря запущен на {addr}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        while !*shutdown_rx.borrow_and_update() {
            if shutdown_rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await?;
    Ok(())
}
