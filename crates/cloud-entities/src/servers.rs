//! Entity для таблицы servers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    /// UUID первичного ключа
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Имя сервера, уникально среди всех серверов
    #[sea_orm(unique)]
    pub name: String,

    /// Регион размещения
    pub region: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vms::Entity")]
    Vms,
}

impl Related<super::vms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
