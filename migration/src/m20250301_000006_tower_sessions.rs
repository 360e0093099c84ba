use sea_orm_migration::{prelude::*, schema::*};

static IDX_TOWER_SESSIONS_EXPIRY_DATE: &str = "idx-tower_sessions-expiry_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TowerSessions::Table)
                    .if_not_exists()
                    .col(string(TowerSessions::Id).primary_key())
                    .col(text(TowerSessions::Data))
                    .col(big_integer(TowerSessions::ExpiryDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOWER_SESSIONS_EXPIRY_DATE)
                    .table(TowerSessions::Table)
                    .col(TowerSessions::ExpiryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOWER_SESSIONS_EXPIRY_DATE)
                    .table(TowerSessions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TowerSessions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TowerSessions {
    Table,
    Id,
    Data,
    ExpiryDate,
}
