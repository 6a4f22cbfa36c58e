//! Entity для таблицы vms.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vms")]
pub struct Model {
    /// UUID первичного ключа
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Имя ВМ (без пробелов по краям), уникально среди всех ВМ
    #[sea_orm(unique)]
    pub name: String,

    /// Количество vCPU (1..=16)
    pub cpus: i32,

    /// Объём RAM в ГБ (1..=64)
    pub ram: i32,

    /// Сервер, на котором размещена ВМ
    pub server_id: String,

    /// Флаг активности, клиентом не задаётся
    pub active: bool,

    /// Публичный SSH-ключ или заголовок приватного ключа OpenSSH
    #[sea_orm(column_type = "Text", nullable)]
    pub ssh_key: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::servers::Entity",
        from = "Column::ServerId",
        to = "super::servers::Column::Id"
    )]
    Server,
}

impl Related<super::servers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
