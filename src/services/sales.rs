//! # 成交记录服务
//!
//! 成交记录的 DTO 定义与增删改查封装

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use entity::sales::{self, SaleSide};

use super::base::{EntityDto, ServiceBase};
use super::validation::{decimal_in_range, required, required_str};
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 成交金额上限，对应数据库 Decimal(18, 2)
fn max_sale_price() -> Decimal {
    Decimal::new(999_999_999_999_999_999, 2)
}

/// 成交记录 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(default)]
    pub id: i32,
    pub owned_by_id: Option<String>,
    pub property_id: Option<i32>,
    pub client_id: Option<i32>,
    pub sale_side: SaleSide,
    pub closing_date: NaiveDate,
    pub sale_price: Option<Decimal>,
    pub commission_rate: Option<Decimal>,
}

impl Default for SaleDto {
    fn default() -> Self {
        Self {
            id: 0,
            owned_by_id: None,
            property_id: None,
            client_id: None,
            sale_side: SaleSide::Buyer,
            closing_date: chrono::Utc::now().date_naive(),
            sale_price: None,
            commission_rate: None,
        }
    }
}

impl EntityDto<entity::Sales> for SaleDto {
    fn from_model(model: &sales::Model) -> Self {
        Self {
            id: model.id,
            owned_by_id: Some(model.owned_by_id.clone()),
            property_id: Some(model.property_id),
            client_id: Some(model.client_id),
            sale_side: model.sale_side,
            closing_date: model.closing_date,
            sale_price: Some(model.sale_price),
            commission_rate: Some(model.commission_rate),
        }
    }

    fn into_active_model(self) -> sales::ActiveModel {
        let mut model = sales::ActiveModel::default();
        self.apply_to(&mut model);
        model
    }

    fn apply_to(&self, model: &mut sales::ActiveModel) {
        model.owned_by_id = Set(self.owned_by_id.clone().unwrap_or_default());
        model.property_id = Set(self.property_id.unwrap_or_default());
        model.client_id = Set(self.client_id.unwrap_or_default());
        model.sale_side = Set(self.sale_side);
        model.closing_date = Set(self.closing_date);
        model.sale_price = Set(self.sale_price.unwrap_or_default());
        model.commission_rate = Set(self.commission_rate.unwrap_or_default());
    }

    fn validate(&self) -> Result<()> {
        required_str(self.owned_by_id.as_deref(), "owned_by_id")?;
        required(&self.property_id, "property_id")?;
        required(&self.client_id, "client_id")?;
        required(&self.sale_price, "sale_price")?;
        required(&self.commission_rate, "commission_rate")?;
        decimal_in_range(self.sale_price, Decimal::ZERO, max_sale_price(), "sale_price")?;
        decimal_in_range(
            self.commission_rate,
            Decimal::ZERO,
            Decimal::ONE,
            "commission_rate",
        )?;
        Ok(())
    }
}

/// 成交记录服务
pub struct SaleService {
    base: ServiceBase<entity::Sales>,
}

impl SaleService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            base: ServiceBase::new(uow, "sale"),
        }
    }

    pub async fn get_sale_dto_by_id(&self, id: i32) -> Result<Option<SaleDto>> {
        self.base.get_dto_by_id(id).await
    }

    pub async fn get_all_sale_dtos(&self) -> Result<Vec<SaleDto>> {
        self.base.all_dto().await
    }

    /// 分页查询，`owner` 只看某个经纪人名下的成交
    pub async fn list_sales(
        &self,
        page: u64,
        limit: u64,
        owner: Option<&str>,
    ) -> Result<(Vec<SaleDto>, u64)> {
        let mut select = self.base.all().order_by_asc(sales::Column::Id);
        if let Some(owner_id) = owner {
            select = select.filter(sales::Column::OwnedById.eq(owner_id));
        }
        self.base.page_dto(select, page, limit).await
    }

    pub async fn create_sale(&self, dto: SaleDto) -> Result<SaleDto> {
        self.base.insert_dto(dto).await
    }

    pub async fn update_sale(&self, dto: SaleDto) -> Result<SaleDto> {
        self.base.update_dto(dto.id, dto).await
    }

    pub async fn delete_sale(&self, id: i32) -> Result<()> {
        self.base.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::testing::{seed_agent, seed_client_and_property, test_db, uow_as};
    use std::sync::Arc;

    #[test]
    fn test_validate_commission_rate_range() {
        let dto = SaleDto {
            owned_by_id: Some("agent-1".to_string()),
            property_id: Some(1),
            client_id: Some(1),
            sale_price: Some(Decimal::from(300_000)),
            commission_rate: Some(Decimal::from(3)),
            ..Default::default()
        };
        assert!(matches!(
            dto.validate().unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_sale_round_trip() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let uow = uow_as(&conn, &agent);
        let (property_id, client_id) = seed_client_and_property(&uow).await;

        let service = SaleService::new(Arc::clone(&uow));
        let created = service
            .create_sale(SaleDto {
                owned_by_id: Some(agent.clone()),
                property_id: Some(property_id),
                client_id: Some(client_id),
                sale_side: SaleSide::Seller,
                closing_date: NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
                sale_price: Some(Decimal::from(300_000)),
                commission_rate: Some(Decimal::new(250, 4)),
                ..Default::default()
            })
            .await
            .expect("create sale");

        let fetched = service
            .get_sale_dto_by_id(created.id)
            .await
            .expect("query")
            .expect("sale exists");
        assert_eq!(fetched.sale_side, SaleSide::Seller);
        assert_eq!(fetched.sale_price, Some(Decimal::from(300_000)));
    }
}
