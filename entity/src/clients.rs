//! # 客户实体定义
//!
//! 经纪人跟进的买卖客户档案

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 客户实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub birthdate: Option<Date>,
    pub occupation: Option<String>,
    pub employer: Option<String>,
    pub referred_by: Option<String>,
    pub notes: Option<String>,
    pub created: Option<DateTime>,
    pub created_by: Option<String>,
    pub last_modified: Option<DateTime>,
    pub last_modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sales::Entity")]
    Sales,
}

impl Related<super::sales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 列表展示用的 "姓, 名; Phone: 电话" 格式
    #[must_use]
    pub fn full_name_and_phone(&self) -> String {
        format!(
            "{}, {}; Phone: {}",
            self.last_name, self.first_name, self.phone_number
        )
    }
}
