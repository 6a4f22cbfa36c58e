//! Сервис серверов: проверка существования, создание, выборка.

use crate::error::AppError;
use crate::validation::{self, normalize_name, ServerPayload, StoreSnapshot};
use cloud_entities::servers::{ActiveModel, Column, Entity as ServerEntity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Существует ли сервер с данным id.
pub async fn server_exists(db: &DatabaseConnection, id: &str) -> Result<bool, AppError> {
    let count = ServerEntity::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

/// Занято ли имя сервера.
pub async fn server_name_exists(db: &DatabaseConnection, name: &str) -> Result<bool, AppError> {
    let count = ServerEntity::find()
        .filter(Column::Name.eq(name))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Проверить и создать сервер.
pub async fn create_server(
    db: &DatabaseConnection,
    payload: ServerPayload,
) -> Result<Model, AppError> {
    let mut snapshot = StoreSnapshot::default();
    if let Some(name) = normalize_name(payload.name.as_deref()) {
        if server_name_exists(db, name).await? {
            snapshot.add_server_name(name);
        }
    }

    let record = validation::validate_server(&payload, &snapshot).inspect_err(|e| {
        tracing::debug!("Сервер отклонён: {e}");
    })?;

    let model = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(record.name),
        region: Set(record.region),
    };
    let server = model.insert(db).await?;
    tracing::info!("Создан сервер {} ({})", server.name, server.id);

    Ok(server)
}

/// Получить сервер по id.
pub async fn get_server(db: &DatabaseConnection, id: &str) -> Result<Model, AppError> {
    ServerEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Сервер не найден: {id}")))
}

/// Список всех серверов, по имени.
pub async fn list_servers(db: &DatabaseConnection) -> Result<Vec<Model>, AppError> {
    let servers = ServerEntity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(servers)
}

pub async fn count_servers(db: &DatabaseConnection) -> Result<u64, AppError> {
    Ok(ServerEntity::find().count(db).await?)
}
