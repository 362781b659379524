//! # 日程实体定义
//!
//! 带重复规则的日程安排

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 日程实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub start: DateTime,
    pub end: DateTime,
    pub title: String,
    pub description: Option<String>,
    pub is_all_day: bool,
    pub recurrence_rule: Option<String>,
    pub recurrence_id: Option<i32>,
    pub recurrence_exceptions: Option<String>,
    pub created: Option<DateTime>,
    pub created_by: Option<String>,
    pub last_modified: Option<DateTime>,
    pub last_modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
