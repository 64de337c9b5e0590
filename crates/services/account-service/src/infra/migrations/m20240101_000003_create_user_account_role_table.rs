//! Migration: Create the user_account_role join table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_role_table::Role;
use super::m20240101_000002_create_user_account_table::UserAccount;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccountRole::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserAccountRole::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserAccountRole::RoleName).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserAccountRole::UserId)
                            .col(UserAccountRole::RoleName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_account_role_user_id")
                            .from(UserAccountRole::Table, UserAccountRole::UserId)
                            .to(UserAccount::Table, UserAccount::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_account_role_role_name")
                            .from(UserAccountRole::Table, UserAccountRole::RoleName)
                            .to(Role::Table, Role::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccountRole::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAccountRole {
    Table,
    UserId,
    RoleName,
}
