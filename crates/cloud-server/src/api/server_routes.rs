//! Маршруты для серверов: список, создание, получение.

use crate::api::middleware::{ApiJson, Authorized};
use crate::api::AppState;
use crate::error::AppError;
use crate::services::server_service;
use crate::validation::ServerPayload;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use cloud_entities::servers;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServerView {
    pub id: String,
    pub name: String,
    pub region: String,
}

impl From<servers::Model> for ServerView {
    fn from(s: servers::Model) -> Self {
        ServerView {
            id: s.id,
            name: s.name,
            region: s.region,
        }
    }
}

pub fn routes() -> Router<AppState> {
    let collection = get(list_servers).post(create_server);

    Router::new()
        .route("/servers", collection.clone())
        .route("/servers/", collection)
        .route("/servers/{id}", get(get_server))
        .route("/servers/{id}/", get(get_server))
}

/// GET /api/servers — список серверов.
async fn list_servers(
    State(state): State<AppState>,
    _auth: Authorized,
) -> Result<Json<Vec<ServerView>>, AppError> {
    let servers = server_service::list_servers(&state.db).await?;
    Ok(Json(servers.into_iter().map(ServerView::from).collect()))
}

/// POST /api/servers — создание сервера.
async fn create_server(
    State(state): State<AppState>,
    _auth: Authorized,
    ApiJson(payload): ApiJson<ServerPayload>,
) -> Result<(StatusCode, Json<ServerView>), AppError> {
    let server = server_service::create_server(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(server.into())))
}

/// GET /api/servers/{id} — сервер по id.
async fn get_server(
    State(state): State<AppState>,
    _auth: Authorized,
    Path(id): Path<String>,
) -> Result<Json<ServerView>, AppError> {
    let server = server_service::get_server(&state.db, &id).await?;
    Ok(Json(server.into()))
}
