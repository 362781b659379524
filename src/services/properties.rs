//! # 房产服务
//!
//! 房产的 DTO 定义与增删改查封装

use std::sync::Arc;

use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use entity::properties::{self, PropertyKind};

use super::base::{EntityDto, ServiceBase};
use super::validation::{in_range, max_len, non_negative, required_str};
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 房产 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyDto {
    #[serde(default)]
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
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
}

impl PropertyDto {
    /// 单行完整地址，"街道 城市, 州 邮编"
    #[must_use]
    pub fn full_address(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street.as_deref().unwrap_or_default(),
            self.city.as_deref().unwrap_or_default(),
            self.state.as_deref().unwrap_or_default(),
            self.zip_code.as_deref().unwrap_or_default()
        )
    }
}

impl EntityDto<entity::Properties> for PropertyDto {
    fn from_model(model: &properties::Model) -> Self {
        Self {
            id: model.id,
            street: Some(model.street.clone()),
            city: Some(model.city.clone()),
            state: Some(model.state.clone()),
            zip_code: Some(model.zip_code.clone()),
            country: model.country.clone(),
            year_built: model.year_built,
            bedrooms: model.bedrooms,
            full_bathrooms: model.full_bathrooms,
            half_bathrooms: model.half_bathrooms,
            square_footage: model.square_footage,
            number_of_levels: model.number_of_levels,
            lot_size: model.lot_size,
            property_kind: model.property_kind,
            description: model.description.clone(),
        }
    }

    fn into_active_model(self) -> properties::ActiveModel {
        let mut model = properties::ActiveModel::default();
        self.apply_to(&mut model);
        model
    }

    fn apply_to(&self, model: &mut properties::ActiveModel) {
        model.street = Set(self.street.clone().unwrap_or_default());
        model.city = Set(self.city.clone().unwrap_or_default());
        model.state = Set(self.state.clone().unwrap_or_default());
        model.zip_code = Set(self.zip_code.clone().unwrap_or_default());
        model.country = Set(self.country.clone());
        model.year_built = Set(self.year_built);
        model.bedrooms = Set(self.bedrooms);
        model.full_bathrooms = Set(self.full_bathrooms);
        model.half_bathrooms = Set(self.half_bathrooms);
        model.square_footage = Set(self.square_footage);
        model.number_of_levels = Set(self.number_of_levels);
        model.lot_size = Set(self.lot_size);
        model.property_kind = Set(self.property_kind);
        model.description = Set(self.description.clone());
    }

    fn validate(&self) -> Result<()> {
        required_str(self.street.as_deref(), "street")?;
        required_str(self.city.as_deref(), "city")?;
        required_str(self.state.as_deref(), "state")?;
        required_str(self.zip_code.as_deref(), "zip_code")?;
        max_len(self.street.as_deref(), 100, "street")?;
        max_len(self.city.as_deref(), 50, "city")?;
        max_len(self.state.as_deref(), 2, "state")?;
        max_len(self.zip_code.as_deref(), 10, "zip_code")?;
        max_len(self.country.as_deref(), 50, "country")?;
        in_range(self.bedrooms, 1, 99, "bedrooms")?;
        in_range(self.full_bathrooms, 1, 99, "full_bathrooms")?;
        in_range(self.half_bathrooms, 1, 99, "half_bathrooms")?;
        in_range(self.number_of_levels, 1, 9, "number_of_levels")?;
        non_negative(self.square_footage, "square_footage")?;
        non_negative(self.lot_size, "lot_size")?;
        Ok(())
    }
}

/// 房产服务
pub struct PropertyService {
    base: ServiceBase<entity::Properties>,
}

impl PropertyService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            base: ServiceBase::new(uow, "property"),
        }
    }

    pub async fn get_property_dto_by_id(&self, id: i32) -> Result<Option<PropertyDto>> {
        self.base.get_dto_by_id(id).await
    }

    pub async fn get_all_property_dtos(&self) -> Result<Vec<PropertyDto>> {
        self.base.all_dto().await
    }

    /// 分页查询，`search` 对城市做模糊匹配
    pub async fn list_properties(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<(Vec<PropertyDto>, u64)> {
        let mut select = self.base.all().order_by_asc(properties::Column::Id);
        if let Some(term) = search {
            select = select.filter(properties::Column::City.contains(term));
        }
        self.base.page_dto(select, page, limit).await
    }

    pub async fn create_property(&self, dto: PropertyDto) -> Result<PropertyDto> {
        self.base.insert_dto(dto).await
    }

    pub async fn update_property(&self, dto: PropertyDto) -> Result<PropertyDto> {
        self.base.update_dto(dto.id, dto).await
    }

    pub async fn delete_property(&self, id: i32) -> Result<()> {
        self.base.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::testing::{seed_agent, test_db, uow_as};

    fn sample_dto() -> PropertyDto {
        PropertyDto {
            street: Some("123 Main St".to_string()),
            city: Some("Anytown".to_string()),
            state: Some("NY".to_string()),
            zip_code: Some("12345".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_address_format() {
        assert_eq!(sample_dto().full_address(), "123 Main St Anytown, NY 12345");
    }

    #[test]
    fn test_validate_bedroom_range() {
        let dto = PropertyDto {
            bedrooms: Some(0),
            ..sample_dto()
        };
        assert!(matches!(
            dto.validate().unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_update_round_trip() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = PropertyService::new(uow_as(&conn, &agent));

        let created = service
            .create_property(PropertyDto {
                bedrooms: Some(3),
                property_kind: Some(PropertyKind::Condo),
                ..sample_dto()
            })
            .await
            .expect("create");

        let updated = service
            .update_property(PropertyDto {
                id: created.id,
                bedrooms: Some(4),
                ..sample_dto()
            })
            .await
            .expect("update");

        assert_eq!(updated.bedrooms, Some(4));
        // 未在更新 DTO 中携带的可选字段被写空，与映射层整体覆盖语义一致
        assert_eq!(updated.property_kind, None);
    }
}
