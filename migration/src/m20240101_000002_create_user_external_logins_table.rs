use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserExternalLogins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserExternalLogins::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserExternalLogins::UserId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExternalLogins::Provider)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExternalLogins::ProviderKey)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExternalLogins::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_external_logins_user_id")
                            .from(UserExternalLogins::Table, UserExternalLogins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一外部身份只允许绑定一个本地用户
        manager
            .create_index(
                Index::create()
                    .name("idx_user_external_logins_provider_key")
                    .table(UserExternalLogins::Table)
                    .col(UserExternalLogins::Provider)
                    .col(UserExternalLogins::ProviderKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_external_logins_user_id")
                    .table(UserExternalLogins::Table)
                    .col(UserExternalLogins::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserExternalLogins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserExternalLogins {
    Table,
    Id,
    UserId,
    Provider,
    ProviderKey,
    CreatedAt,
}
