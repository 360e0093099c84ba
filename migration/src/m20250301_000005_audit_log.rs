use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_user::User;

static IDX_AUDIT_LOG_ENTITY: &str = "idx-audit_log-entity_type-entity_id";
static FK_AUDIT_LOG_USER_ID: &str = "fk-audit_log-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer(AuditLog::UserId))
                    .col(string(AuditLog::Action))
                    .col(string(AuditLog::EntityType))
                    .col(integer(AuditLog::EntityId))
                    .col(text_null(AuditLog::Details))
                    .col(timestamp(AuditLog::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUDIT_LOG_USER_ID)
                            .from(AuditLog::Table, AuditLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOG_ENTITY)
                    .table(AuditLog::Table)
                    .col(AuditLog::EntityType)
                    .col(AuditLog::EntityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_LOG_ENTITY)
                    .table(AuditLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditLog {
    Table,
    Id,
    UserId,
    Action,
    EntityType,
    EntityId,
    Details,
    CreatedAt,
}
