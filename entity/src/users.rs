//! # 经纪人用户实体定义
//!
//! 外部身份登录的本地用户记录，主键为字符串（UUID）

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_external_logins::Entity")]
    UserExternalLogins,
    #[sea_orm(has_many = "super::sales::Entity")]
    Sales,
    #[sea_orm(has_many = "super::sales_goals::Entity")]
    SalesGoals,
}

impl Related<super::user_external_logins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserExternalLogins.def()
    }
}

impl Related<super::sales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::sales_goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesGoals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 显示用全名，格式为 "姓, 名"
    ///
    /// 只有一项时返回该项，两项都缺失时回退到用户名
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(last) = self.last_name.as_deref() {
            if !last.trim().is_empty() {
                parts.push(last);
            }
        }
        if let Some(first) = self.first_name.as_deref() {
            if !first.trim().is_empty() {
                parts.push(first);
            }
        }
        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(", ")
        }
    }
}
