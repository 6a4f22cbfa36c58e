//! Ядро API облачных ресурсов: серверы и виртуальные машины.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod validation;


use api::AppState;
use axum::Router;
use cloud_migration::{Migrator, MigratorTrait};
use config::ServerConfig;
use sea_orm::{Database, DatabaseConnection};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Запустить API.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(config.connect_options()).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Состояние приложения и маршрутизатор
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

    info!("Сервер остановлен");
    Ok(())
}

async fn serve(
    config: &ServerConfig,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.listen.parse()?;
    info!("Запуск HTTP сервера на {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
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
