//! Маршруты для ВМ: CRUD с валидацией перед записью.

use crate::api::middleware::{ApiJson, Authorized};
use crate::api::server_routes::ServerView;
use crate::api::AppState;
use crate::error::AppError;
use crate::services::vm_service::{self, VmWithServer};
use crate::validation::VmPayload;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// ВМ в ответе API: сервер вложен целиком, только для чтения.
#[derive(Debug, Serialize)]
pub struct VmView {
    pub id: String,
    pub name: String,
    pub cpus: i32,
    pub ram: i32,
    pub server: Option<ServerView>,
    pub active: bool,
    pub ssh_key: Option<String>,
}

impl From<VmWithServer> for VmView {
    fn from((vm, server): VmWithServer) -> Self {
        VmView {
            id: vm.id,
            name: vm.name,
            cpus: vm.cpus,
            ram: vm.ram,
            server: server.map(ServerView::from),
            active: vm.active,
            ssh_key: vm.ssh_key,
        }
    }
}

/// Маршруты доступны и со слешем на конце, как у клиентов DRF (`/api/vms/`).
pub fn routes() -> Router<AppState> {
    let collection = get(list_vms).post(create_vm);
    let item = get(get_vm).put(replace_vm).patch(patch_vm).delete(delete_vm);

    Router::new()
        .route("/vms", collection.clone())
        .route("/vms/", collection)
        .route("/vms/{id}", item.clone())
        .route("/vms/{id}/", item)
}

/// GET /api/vms — список ВМ.
async fn list_vms(
    State(state): State<AppState>,
    _auth: Authorized,
) -> Result<Json<Vec<VmView>>, AppError> {
    let vms = vm_service::list_vms(&state.db).await?;
    Ok(Json(vms.into_iter().map(VmView::from).collect()))
}

/// POST /api/vms — создание ВМ.
async fn create_vm(
    State(state): State<AppState>,
    _auth: Authorized,
    ApiJson(payload): ApiJson<VmPayload>,
) -> Result<(StatusCode, Json<VmView>), AppError> {
    let vm = vm_service::create_vm(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(vm.into())))
}

/// GET /api/vms/{id} — ВМ по id.
async fn get_vm(
    State(state): State<AppState>,
    _auth: Authorized,
    Path(id): Path<String>,
) -> Result<Json<VmView>, AppError> {
    let vm = vm_service::get_vm(&state.db, &id).await?;
    Ok(Json(vm.into()))
}

/// PUT /api/vms/{id} — полное изменение.
async fn replace_vm(
    State(state): State<AppState>,
    _auth: Authorized,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<VmPayload>,
) -> Result<Json<VmView>, AppError> {
    let vm = vm_service::replace_vm(&state.db, &id, payload).await?;
    Ok(Json(vm.into()))
}

/// PATCH /api/vms/{id} — частичное изменение.
async fn patch_vm(
    State(state): State<AppState>,
    _auth: Authorized,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<VmPayload>,
) -> Result<Json<VmView>, AppError> {
    let vm = vm_service::patch_vm(&state.db, &id, payload).await?;
    Ok(Json(vm.into()))
}

/// DELETE /api/vms/{id} — удаление.
async fn delete_vm(
    State(state): State<AppState>,
    _auth: Authorized,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    vm_service::delete_vm(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
