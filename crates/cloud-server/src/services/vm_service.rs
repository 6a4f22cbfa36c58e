//! Сервис ВМ: сбор снимка хранилища, валидация и запись.

use crate::error::AppError;
use crate::services::server_service;
use crate::validation::{self, normalize_name, NormalizedVm, StoreSnapshot, VmPayload};
use cloud_entities::servers::{self, Entity as ServerEntity};
use cloud_entities::vms::{ActiveModel, Column, Entity as VmEntity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// ВМ вместе с сервером, на котором она размещена.
pub type VmWithServer = (Model, Option<servers::Model>);

/// Занято ли имя ВМ, не считая записи `exclude_id`.
pub async fn vm_name_exists(
    db: &DatabaseConnection,
    name: &str,
    exclude_id: Option<&str>,
) -> Result<bool, AppError> {
    let mut query = VmEntity::find().filter(Column::Name.eq(name));
    if let Some(id) = exclude_id {
        query = query.filter(Column::Id.ne(id));
    }
    Ok(query.count(db).await? > 0)
}

/// Собрать факты о хранилище, нужные для проверки `payload`.
async fn load_snapshot(
    db: &DatabaseConnection,
    payload: &VmPayload,
    exclude_id: Option<&str>,
) -> Result<StoreSnapshot, AppError> {
    let mut snapshot = StoreSnapshot::default();

    if let Some(server_id) = payload.server_id.as_deref() {
        if server_service::server_exists(db, server_id).await? {
            snapshot.add_server(server_id);
        }
    }

    if let Some(name) = normalize_name(payload.name.as_deref()) {
        if vm_name_exists(db, name, exclude_id).await? {
            snapshot.add_vm_name(name);
        }
    }

    Ok(snapshot)
}

/// Проверить и создать ВМ.
pub async fn create_vm(
    db: &DatabaseConnection,
    payload: VmPayload,
) -> Result<VmWithServer, AppError> {
    let snapshot = load_snapshot(db, &payload, None).await?;
    let record = validation::validate_create(&payload, &snapshot).inspect_err(|e| {
        tracing::debug!("ВМ отклонена при создании: {e}");
    })?;

    let model = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(record.name),
        cpus: Set(record.cpus),
        ram: Set(record.ram),
        server_id: Set(record.server_id),
        active: Set(record.active),
        ssh_key: Set(record.ssh_key),
    };
    let vm = model.insert(db).await?;
    tracing::info!("Создана ВМ {} ({}) на сервере {}", vm.name, vm.id, vm.server_id);

    get_vm(db, &vm.id).await
}

/// Полное изменение ВМ (PUT): отсутствующий ssh_key очищается.
pub async fn replace_vm(
    db: &DatabaseConnection,
    id: &str,
    payload: VmPayload,
) -> Result<VmWithServer, AppError> {
    let existing = find_vm(db, id).await?;
    apply_update(db, existing, payload).await
}

/// Частичное изменение ВМ (PATCH): отсутствующие поля сохраняют значения.
pub async fn patch_vm(
    db: &DatabaseConnection,
    id: &str,
    payload: VmPayload,
) -> Result<VmWithServer, AppError> {
    let existing = find_vm(db, id).await?;
    let merged = payload.merged_over(&existing);
    apply_update(db, existing, merged).await
}

async fn apply_update(
    db: &DatabaseConnection,
    existing: Model,
    payload: VmPayload,
) -> Result<VmWithServer, AppError> {
    let snapshot = load_snapshot(db, &payload, Some(&existing.id)).await?;
    let record: NormalizedVm = validation::validate_update(&existing, &payload, &snapshot)
        .inspect_err(|e| {
            tracing::debug!("ВМ {} отклонена при изменении: {e}", existing.id);
        })?;

    let id = existing.id.clone();
    let mut model: ActiveModel = existing.into();
    model.name = Set(record.name);
    model.cpus = Set(record.cpus);
    model.ram = Set(record.ram);
    model.server_id = Set(record.server_id);
    model.ssh_key = Set(record.ssh_key);
    model.update(db).await?;
    tracing::info!("Изменена ВМ {id}");

    get_vm(db, &id).await
}

/// Удалить ВМ по id.
pub async fn delete_vm(db: &DatabaseConnection, id: &str) -> Result<(), AppError> {
    let result = VmEntity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("ВМ не найдена: {id}")));
    }
    tracing::info!("Удалена ВМ {id}");
    Ok(())
}

/// Получить ВМ вместе с сервером.
pub async fn get_vm(db: &DatabaseConnection, id: &str) -> Result<VmWithServer, AppError> {
    VmEntity::find_by_id(id)
        .find_also_related(ServerEntity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("ВМ не найдена: {id}")))
}

/// Список всех ВМ с серверами, по имени.
pub async fn list_vms(db: &DatabaseConnection) -> Result<Vec<VmWithServer>, AppError> {
    let vms = VmEntity::find()
        .find_also_related(ServerEntity)
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(vms)
}

pub async fn count_vms(db: &DatabaseConnection) -> Result<u64, AppError> {
    Ok(VmEntity::find().count(db).await?)
}

async fn find_vm(db: &DatabaseConnection, id: &str) -> Result<Model, AppError> {
    VmEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("ВМ не найдена: {id}")))
}
