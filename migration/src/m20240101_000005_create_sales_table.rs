use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000003_create_clients_table::Clients;
use super::m20240101_000004_create_properties_table::Properties;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::OwnedById).string_len(36).not_null())
                    .col(ColumnDef::new(Sales::PropertyId).integer().not_null())
                    .col(ColumnDef::new(Sales::ClientId).integer().not_null())
                    .col(ColumnDef::new(Sales::SaleSide).string_len(16).not_null())
                    .col(ColumnDef::new(Sales::ClosingDate).date().not_null())
                    .col(
                        ColumnDef::new(Sales::SalePrice)
                            .decimal_len(18, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sales::CommissionRate)
                            .decimal_len(5, 4)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sales::Created).timestamp())
                    .col(ColumnDef::new(Sales::CreatedBy).string_len(36))
                    .col(ColumnDef::new(Sales::LastModified).timestamp())
                    .col(ColumnDef::new(Sales::LastModifiedBy).string_len(36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_owned_by_id")
                            .from(Sales::Table, Sales::OwnedById)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_property_id")
                            .from(Sales::Table, Sales::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_client_id")
                            .from(Sales::Table, Sales::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_created_by")
                            .from(Sales::Table, Sales::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_last_modified_by")
                            .from(Sales::Table, Sales::LastModifiedBy)
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
                    .name("idx_sales_owned_by_id")
                    .table(Sales::Table)
                    .col(Sales::OwnedById)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sales_closing_date")
                    .table(Sales::Table)
                    .col(Sales::ClosingDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sales {
    Table,
    Id,
    OwnedById,
    PropertyId,
    ClientId,
    SaleSide,
    ClosingDate,
    SalePrice,
    CommissionRate,
    Created,
    CreatedBy,
    LastModified,
    LastModifiedBy,
}
