//! Миграция: создание таблицы vms со ссылкой на servers.

use crate::m001_create_servers::Servers;
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m002_create_vms"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vms::Id).string().not_null().primary_key())
                    // Уникальный индекс по имени закрывает гонку двух параллельных create
                    .col(ColumnDef::new(Vms::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Vms::Cpus).integer().not_null())
                    .col(ColumnDef::new(Vms::Ram).integer().not_null())
                    .col(ColumnDef::new(Vms::ServerId).string().not_null())
                    .col(
                        ColumnDef::new(Vms::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Vms::SshKey).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vms_server_id")
                            .from(Vms::Table, Vms::ServerId)
                            .to(Servers::Table, Servers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Индекс по server_id для выборки ВМ сервера
        manager
            .create_index(
                Index::create()
                    .table(Vms::Table)
                    .col(Vms::ServerId)
                    .name("idx_vms_server_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vms {
    Table,
    Id,
    Name,
    Cpus,
    Ram,
    ServerId,
    Active,
    SshKey,
}
