//! # 销售目标实体定义
//!
//! 经纪人按月设定的销售额目标，goal_month_year 恒为当月一号

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 销售目标实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owned_by_id: String,
    pub goal_month_year: Date,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub goal_amount: Decimal,
    pub created: Option<DateTime>,
    pub created_by: Option<String>,
    pub last_modified: Option<DateTime>,
    pub last_modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnedById",
        to = "super::users::Column::Id"
    )]
    OwnedBy,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OwnedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
