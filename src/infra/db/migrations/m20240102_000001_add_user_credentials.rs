//! Migration: Add usernames, user roles and role names.
//!
//! Existing accounts get their e-mail as username. Columns are added one
//! statement at a time so the migration also runs on SQLite.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Usuarios::Table)
                    .add_column(ColumnDef::new(Usuarios::Username).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Usuarios::Table)
                    .add_column(ColumnDef::new(Usuarios::Idroles).integer().null())
                    .to_owned(),
            )
            .await?;

        // Back-fill usernames from e-mails
        manager
            .exec_stmt(
                Query::update()
                    .table(Usuarios::Table)
                    .value(Usuarios::Username, Expr::col(Usuarios::EmailUser))
                    .and_where(Expr::col(Usuarios::Username).is_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usuarios_username")
                    .table(Usuarios::Table)
                    .col(Usuarios::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Roles::Table)
                    .add_column(ColumnDef::new(Roles::NombreRol).string_len(50).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_usuarios_username")
                    .table(Usuarios::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Roles::Table)
                    .drop_column(Roles::NombreRol)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Usuarios::Table)
                    .drop_column(Usuarios::Idroles)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Usuarios::Table)
                    .drop_column(Usuarios::Username)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    EmailUser,
    Username,
    Idroles,
}

#[derive(Iden)]
enum Roles {
    Table,
    NombreRol,
}
