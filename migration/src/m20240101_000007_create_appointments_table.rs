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
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Appointments::Start).timestamp().not_null())
                    .col(ColumnDef::new(Appointments::End).timestamp().not_null())
                    .col(
                        ColumnDef::new(Appointments::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Description).text())
                    .col(
                        ColumnDef::new(Appointments::IsAllDay)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Appointments::RecurrenceRule).string_len(512))
                    .col(ColumnDef::new(Appointments::RecurrenceId).integer())
                    .col(ColumnDef::new(Appointments::RecurrenceExceptions).text())
                    .col(ColumnDef::new(Appointments::Created).timestamp())
                    .col(ColumnDef::new(Appointments::CreatedBy).string_len(36))
                    .col(ColumnDef::new(Appointments::LastModified).timestamp())
                    .col(ColumnDef::new(Appointments::LastModifiedBy).string_len(36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_created_by")
                            .from(Appointments::Table, Appointments::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_last_modified_by")
                            .from(Appointments::Table, Appointments::LastModifiedBy)
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
                    .name("idx_appointments_start")
                    .table(Appointments::Table)
                    .col(Appointments::Start)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    Start,
    End,
    Title,
    Description,
    IsAllDay,
    RecurrenceRule,
    RecurrenceId,
    RecurrenceExceptions,
    Created,
    CreatedBy,
    LastModified,
    LastModifiedBy,
}
