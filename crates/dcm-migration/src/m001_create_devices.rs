//! Миграция: создание таблицы devices.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_devices"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::Name).string().null())
                    .col(ColumnDef::new(Devices::MacAddress).string().null())
                    .col(ColumnDef::new(Devices::IpAddress).string().null())
                    .col(ColumnDef::new(Devices::Type).string().null())
                    .col(ColumnDef::new(Devices::SerialNumber).string().null())
                    .col(ColumnDef::new(Devices::Owner).string().null())
                    .col(ColumnDef::new(Devices::Config).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Devices {
    Table,
    Id,
    Name,
    MacAddress,
    IpAddress,
    Type,
    SerialNumber,
    Owner,
    Config,
}
