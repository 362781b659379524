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
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Clients::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Clients::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Clients::PhoneNumber)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Clients::Email).string_len(256))
                    .col(ColumnDef::new(Clients::Street).string_len(100))
                    .col(ColumnDef::new(Clients::City).string_len(50))
                    .col(ColumnDef::new(Clients::State).string_len(2))
                    .col(ColumnDef::new(Clients::ZipCode).string_len(10))
                    .col(ColumnDef::new(Clients::Country).string_len(50))
                    .col(ColumnDef::new(Clients::Birthdate).date())
                    .col(ColumnDef::new(Clients::Occupation).string_len(50))
                    .col(ColumnDef::new(Clients::Employer).string_len(100))
                    .col(ColumnDef::new(Clients::ReferredBy).string_len(100))
                    .col(ColumnDef::new(Clients::Notes).text())
                    .col(ColumnDef::new(Clients::Created).timestamp())
                    .col(ColumnDef::new(Clients::CreatedBy).string_len(36))
                    .col(ColumnDef::new(Clients::LastModified).timestamp())
                    .col(ColumnDef::new(Clients::LastModifiedBy).string_len(36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clients_created_by")
                            .from(Clients::Table, Clients::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clients_last_modified_by")
                            .from(Clients::Table, Clients::LastModifiedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_last_name")
                    .table(Clients::Table)
                    .col(Clients::LastName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clients {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Street,
    City,
    State,
    ZipCode,
    Country,
    Birthdate,
    Occupation,
    Employer,
    ReferredBy,
    Notes,
    Created,
    CreatedBy,
    LastModified,
    LastModifiedBy,
}
