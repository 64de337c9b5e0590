//! Migration: Create the role lookup table and seed the role codes.

use sea_orm_migration::prelude::*;

use domain::RoleCode;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Role::Name).string().not_null().primary_key())
                    .col(ColumnDef::new(Role::Description).string().null())
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Role::Table)
            .columns([Role::Name, Role::Description]);
        for role in RoleCode::ALL {
            seed.values_panic([role.as_str().into(), describe(role).into()]);
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

fn describe(role: RoleCode) -> &'static str {
    match role {
        RoleCode::Customer => "Buys and holds tickets",
        RoleCode::Staff => "Operates venues and box offices",
        RoleCode::Admin => "Full administrative access",
    }
}

#[derive(Iden)]
pub enum Role {
    Table,
    Name,
    Description,
}
