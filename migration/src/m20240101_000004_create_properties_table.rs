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
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Properties::Street)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::City).string_len(50).not_null())
                    .col(ColumnDef::new(Properties::State).string_len(2).not_null())
                    .col(
                        ColumnDef::new(Properties::ZipCode)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Country).string_len(50))
                    .col(ColumnDef::new(Properties::YearBuilt).integer())
                    .col(ColumnDef::new(Properties::Bedrooms).integer())
                    .col(ColumnDef::new(Properties::FullBathrooms).integer())
                    .col(ColumnDef::new(Properties::HalfBathrooms).integer())
                    .col(ColumnDef::new(Properties::SquareFootage).integer())
                    .col(ColumnDef::new(Properties::NumberOfLevels).integer())
                    .col(ColumnDef::new(Properties::LotSize).integer())
                    .col(ColumnDef::new(Properties::PropertyKind).string_len(32))
                    .col(ColumnDef::new(Properties::Description).text())
                    .col(ColumnDef::new(Properties::Created).timestamp())
                    .col(ColumnDef::new(Properties::CreatedBy).string_len(36))
                    .col(ColumnDef::new(Properties::LastModified).timestamp())
                    .col(ColumnDef::new(Properties::LastModifiedBy).string_len(36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_created_by")
                            .from(Properties::Table, Properties::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_last_modified_by")
                            .from(Properties::Table, Properties::LastModifiedBy)
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
                    .name("idx_properties_city")
                    .table(Properties::Table)
                    .col(Properties::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Properties {
    Table,
    Id,
    Street,
    City,
    State,
    ZipCode,
    Country,
    YearBuilt,
    Bedrooms,
    FullBathrooms,
    HalfBathrooms,
    SquareFootage,
    NumberOfLevels,
    LotSize,
    PropertyKind,
    Description,
    Created,
    CreatedBy,
    LastModified,
    LastModifiedBy,
}
