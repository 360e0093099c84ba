use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RawMaterial::Table)
                    .if_not_exists()
                    .col(pk_auto(RawMaterial::Id))
                    .col(string(RawMaterial::ItemName))
                    .col(string(RawMaterial::Category))
                    .col(string(RawMaterial::Unit))
                    .col(integer(RawMaterial::Count).default(0))
                    .col(double(RawMaterial::QuantityPerUnit))
                    .col(integer(RawMaterial::ReorderThreshold).default(0))
                    .col(timestamp(RawMaterial::CreatedAt))
                    .col(timestamp(RawMaterial::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RawMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RawMaterial {
    Table,
    Id,
    ItemName,
    Category,
    Unit,
    Count,
    QuantityPerUnit,
    ReorderThreshold,
    CreatedAt,
    UpdatedAt,
}
