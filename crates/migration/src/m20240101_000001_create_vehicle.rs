//! Create `vehicle` table.
//! Ids are assigned by the database on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::Year).not_null())
                    .col(string_len(Vehicle::Make, 255).not_null())
                    .col(string_len(Vehicle::Model, 255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vehicle_make_model")
                    .table(Vehicle::Table)
                    .col(Vehicle::Make)
                    .col(Vehicle::Model)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    Year,
    Make,
    Model,
}
