//! # 房产实体定义
//!
//! 房产地址与结构属性

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 房产类型
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum PropertyKind {
    #[sea_orm(string_value = "single_family_home")]
    SingleFamilyHome,
    #[sea_orm(string_value = "condo")]
    Condo,
    #[sea_orm(string_value = "townhouse")]
    Townhouse,
    #[sea_orm(string_value = "apartment")]
    Apartment,
    #[sea_orm(string_value = "land")]
    Land,
}

/// 房产实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
    pub year_built: Option<i32>,
    pub bedrooms: Option<i32>,
    pub full_bathrooms: Option<i32>,
    pub half_bathrooms: Option<i32>,
    pub square_footage: Option<i32>,
    pub number_of_levels: Option<i32>,
    pub lot_size: Option<i32>,
    pub property_kind: Option<PropertyKind>,
    pub description: Option<String>,
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
    /// 单行完整地址，"街道 城市, 州 邮编"
    #[must_use]
    pub fn full_address(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}
