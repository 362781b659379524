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
                    .table(SalesGoals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesGoals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SalesGoals::OwnedById)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SalesGoals::GoalMonthYear).date().not_null())
                    .col(
                        ColumnDef::new(SalesGoals::GoalAmount)
                            .decimal_len(18, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SalesGoals::Created).timestamp())
                    .col(ColumnDef::new(SalesGoals::CreatedBy).string_len(36))
                    .col(ColumnDef::new(SalesGoals::LastModified).timestamp())
                    .col(ColumnDef::new(SalesGoals::LastModifiedBy).string_len(36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_goals_owned_by_id")
                            .from(SalesGoals::Table, SalesGoals::OwnedById)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_goals_created_by")
                            .from(SalesGoals::Table, SalesGoals::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_goals_last_modified_by")
                            .from(SalesGoals::Table, SalesGoals::LastModifiedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个经纪人每个月份至多一条目标
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_goals_owner_month")
                    .table(SalesGoals::Table)
                    .col(SalesGoals::OwnedById)
                    .col(SalesGoals::GoalMonthYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesGoals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalesGoals {
    Table,
    Id,
    OwnedById,
    GoalMonthYear,
    GoalAmount,
    Created,
    CreatedBy,
    LastModified,
    LastModifiedBy,
}
