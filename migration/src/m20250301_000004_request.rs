use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_user::User, m20250301_000002_product::Product,
    m20250301_000003_raw_material::RawMaterial,
};

static IDX_REQUEST_STATUS: &str = "idx-request-status";
static FK_REQUEST_REQUESTER_ID: &str = "fk-request-requester_id";
static FK_REQUEST_REVIEWED_BY: &str = "fk-request-reviewed_by";
static FK_REQUEST_PRODUCT_ID: &str = "fk-request-product_id";
static FK_REQUEST_RAW_MATERIAL_ID: &str = "fk-request-raw_material_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so they are
        // declared inline with the table definition.
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(integer(Request::RequesterId))
                    .col(integer_null(Request::ProductId))
                    .col(integer_null(Request::RawMaterialId))
                    .col(integer(Request::Quantity))
                    .col(string(Request::Status))
                    .col(text_null(Request::Notes))
                    .col(integer_null(Request::ReviewedBy))
                    .col(timestamp(Request::CreatedAt))
                    .col(timestamp(Request::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REQUEST_REQUESTER_ID)
                            .from(Request::Table, Request::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REQUEST_REVIEWED_BY)
                            .from(Request::Table, Request::ReviewedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REQUEST_PRODUCT_ID)
                            .from(Request::Table, Request::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REQUEST_RAW_MATERIAL_ID)
                            .from(Request::Table, Request::RawMaterialId)
                            .to(RawMaterial::Table, RawMaterial::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REQUEST_STATUS)
                    .table(Request::Table)
                    .col(Request::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REQUEST_STATUS)
                    .table(Request::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Request {
    Table,
    Id,
    RequesterId,
    ProductId,
    RawMaterialId,
    Quantity,
    Status,
    Notes,
    ReviewedBy,
    CreatedAt,
    UpdatedAt,
}
