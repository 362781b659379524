//! # 销售目标服务
//!
//! 按月销售目标的 DTO、派生指标计算与唯一性检查

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use entity::sales_goals;

use super::base::{EntityDto, ServiceBase};
use super::sales::SaleDto;
use super::validation::{decimal_in_range, required, required_str};
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 目标金额上限，对应数据库 Decimal(18, 2)
fn max_goal_amount() -> Decimal {
    Decimal::new(999_999_999_999_999_999, 2)
}

/// 把日期归一到当月一号
fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// 销售目标 DTO
///
/// `sales` 为目标所属经纪人的全部成交记录，由服务查询时填充，
/// 三个派生指标基于它即时计算，不落库
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesGoalDto {
    #[serde(default)]
    pub id: i32,
    pub owned_by_id: Option<String>,
    pub goal_month_year: Option<NaiveDate>,
    pub sales_goal_amount: Option<Decimal>,
    #[serde(default)]
    pub sales: Vec<SaleDto>,
}

impl SalesGoalDto {
    /// 把目标月份归一到当月一号
    pub fn normalize_goal_month(&mut self) {
        if let Some(date) = self.goal_month_year {
            self.goal_month_year = Some(first_of_month(date));
        }
    }

    /// 目标月份内成交额合计；月份缺失时为 0
    #[must_use]
    pub fn total_sales(&self) -> Decimal {
        let Some(month) = self.goal_month_year else {
            return Decimal::ZERO;
        };
        self.sales
            .iter()
            .filter(|sale| {
                sale.closing_date.year() == month.year()
                    && sale.closing_date.month() == month.month()
            })
            .filter_map(|sale| sale.sale_price)
            .sum()
    }

    /// 成交额与目标的差值；目标金额缺失时为 0
    #[must_use]
    pub fn sales_goal_variance(&self) -> Decimal {
        self.sales_goal_amount
            .map_or(Decimal::ZERO, |amount| self.total_sales() - amount)
    }

    /// 目标完成率（百分比）；目标金额缺失或为 0 时为 0
    #[must_use]
    pub fn percent_to_sales_goal(&self) -> Decimal {
        match self.sales_goal_amount {
            Some(amount) if amount != Decimal::ZERO => {
                self.total_sales() / amount * Decimal::from(100)
            }
            _ => Decimal::ZERO,
        }
    }
}

impl EntityDto<entity::SalesGoals> for SalesGoalDto {
    fn from_model(model: &sales_goals::Model) -> Self {
        Self {
            id: model.id,
            owned_by_id: Some(model.owned_by_id.clone()),
            goal_month_year: Some(model.goal_month_year),
            sales_goal_amount: Some(model.goal_amount),
            sales: Vec::new(),
        }
    }

    fn into_active_model(self) -> sales_goals::ActiveModel {
        let mut model = sales_goals::ActiveModel::default();
        self.apply_to(&mut model);
        model
    }

    fn apply_to(&self, model: &mut sales_goals::ActiveModel) {
        model.owned_by_id = Set(self.owned_by_id.clone().unwrap_or_default());
        model.goal_month_year = Set(self
            .goal_month_year
            .map(first_of_month)
            .unwrap_or_default());
        model.goal_amount = Set(self.sales_goal_amount.unwrap_or_default());
    }

    fn validate(&self) -> Result<()> {
        required_str(self.owned_by_id.as_deref(), "owned_by_id")?;
        required(&self.goal_month_year, "goal_month_year")?;
        required(&self.sales_goal_amount, "sales_goal_amount")?;
        decimal_in_range(
            self.sales_goal_amount,
            Decimal::ONE,
            max_goal_amount(),
            "sales_goal_amount",
        )?;
        Ok(())
    }
}

/// 销售目标服务
pub struct SalesGoalService {
    base: ServiceBase<entity::SalesGoals>,
}

impl SalesGoalService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            base: ServiceBase::new(uow, "sales_goal"),
        }
    }

    /// 查询单条目标，并填充所属经纪人的成交记录
    pub async fn get_sales_goal_dto_by_id(&self, id: i32) -> Result<Option<SalesGoalDto>> {
        let Some(mut dto) = self.base.get_dto_by_id::<SalesGoalDto>(id).await? else {
            return Ok(None);
        };
        if let Some(owner) = dto.owned_by_id.clone() {
            dto.sales = self.load_owner_sales(&owner).await?;
        }
        Ok(Some(dto))
    }

    /// 查询全部目标，并按经纪人批量填充成交记录
    pub async fn get_all_sales_goal_dtos(&self) -> Result<Vec<SalesGoalDto>> {
        let mut dtos: Vec<SalesGoalDto> = self.base.all_dto().await?;

        let owners: Vec<String> = {
            let mut ids: Vec<String> = dtos
                .iter()
                .filter_map(|dto| dto.owned_by_id.clone())
                .collect();
            ids.sort();
            ids.dedup();
            ids
        };
        if owners.is_empty() {
            return Ok(dtos);
        }

        let sales = entity::Sales::find()
            .filter(entity::sales::Column::OwnedById.is_in(owners))
            .order_by_asc(entity::sales::Column::Id)
            .all(self.base.unit_of_work().connection())
            .await?;

        let mut by_owner: HashMap<String, Vec<SaleDto>> = HashMap::new();
        for sale in &sales {
            by_owner
                .entry(sale.owned_by_id.clone())
                .or_default()
                .push(SaleDto::from_model(sale));
        }

        for dto in &mut dtos {
            if let Some(owner) = &dto.owned_by_id {
                dto.sales = by_owner.get(owner).cloned().unwrap_or_default();
            }
        }
        Ok(dtos)
    }

    /// 新建目标；目标月份先归一到当月一号
    pub async fn create_sales_goal(&self, mut dto: SalesGoalDto) -> Result<SalesGoalDto> {
        dto.normalize_goal_month();
        self.base.insert_dto(dto).await
    }

    /// 更新目标；目标月份先归一到当月一号
    pub async fn update_sales_goal(&self, mut dto: SalesGoalDto) -> Result<SalesGoalDto> {
        dto.normalize_goal_month();
        self.base.update_dto(dto.id, dto).await
    }

    pub async fn delete_sales_goal(&self, id: i32) -> Result<()> {
        self.base.delete(id).await
    }

    /// 检查 (经纪人, 归一化月份) 是否已有目标
    ///
    /// 更新路径（`dto.id != 0`）会把记录自身排除在外；
    /// 月份缺失时返回 true，这样的记录永远不允许保存
    pub async fn does_goal_exist(&self, dto: &SalesGoalDto) -> Result<bool> {
        let Some(month) = dto.goal_month_year else {
            return Ok(true);
        };
        let month = first_of_month(month);

        let mut query = entity::SalesGoals::find()
            .filter(
                sales_goals::Column::OwnedById.eq(dto.owned_by_id.clone().unwrap_or_default()),
            )
            .filter(sales_goals::Column::GoalMonthYear.eq(month));

        if dto.id != 0 {
            query = query.filter(sales_goals::Column::Id.ne(dto.id));
        }

        let count = query
            .count(self.base.unit_of_work().connection())
            .await?;
        Ok(count > 0)
    }

    async fn load_owner_sales(&self, owner: &str) -> Result<Vec<SaleDto>> {
        let sales = entity::Sales::find()
            .filter(entity::sales::Column::OwnedById.eq(owner))
            .order_by_asc(entity::sales::Column::Id)
            .all(self.base.unit_of_work().connection())
            .await?;
        Ok(sales.iter().map(SaleDto::from_model).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::sales::SaleDto;
    use crate::testing::{seed_agent, seed_client_and_property, test_db, uow_as};
    use entity::sales::SaleSide;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sale_on(closing: NaiveDate, price: i64) -> SaleDto {
        SaleDto {
            closing_date: closing,
            sale_price: Some(Decimal::from(price)),
            ..Default::default()
        }
    }

    fn goal_with_sales(month: Option<NaiveDate>, amount: Option<i64>) -> SalesGoalDto {
        SalesGoalDto {
            owned_by_id: Some("agent-1".to_string()),
            goal_month_year: month,
            sales_goal_amount: amount.map(Decimal::from),
            sales: vec![
                sale_on(date(2022, 1, 1), 100),
                sale_on(date(2022, 1, 31), 200),
                sale_on(date(2022, 2, 1), 400),
            ],
            ..Default::default()
        }
    }

    #[rstest]
    #[case(Some((2022, 1)), 300)]
    #[case(Some((2022, 2)), 400)]
    #[case(None, 0)]
    fn test_total_sales_buckets_by_month(
        #[case] month: Option<(i32, u32)>,
        #[case] expected: i64,
    ) {
        let dto = goal_with_sales(month.map(|(y, m)| date(y, m, 1)), Some(500));
        assert_eq!(dto.total_sales(), Decimal::from(expected));
    }

    #[rstest]
    #[case(Some(500), -200)]
    #[case(Some(300), 0)]
    #[case(Some(200), 100)]
    #[case(None, 0)]
    fn test_sales_goal_variance(#[case] amount: Option<i64>, #[case] expected: i64) {
        let dto = goal_with_sales(Some(date(2022, 1, 1)), amount);
        assert_eq!(dto.sales_goal_variance(), Decimal::from(expected));
    }

    #[rstest]
    #[case(Some(500), 60)]
    #[case(Some(300), 100)]
    #[case(Some(200), 150)]
    #[case(None, 0)]
    fn test_percent_to_sales_goal(#[case] amount: Option<i64>, #[case] expected: i64) {
        let dto = goal_with_sales(Some(date(2022, 1, 1)), amount);
        assert_eq!(dto.percent_to_sales_goal(), Decimal::from(expected));
    }

    #[test]
    fn test_percent_is_zero_when_amount_is_zero() {
        let dto = goal_with_sales(Some(date(2022, 1, 1)), Some(0));
        assert_eq!(dto.percent_to_sales_goal(), Decimal::ZERO);
    }

    fn goal_for(owner: &str, month: NaiveDate, amount: i64) -> SalesGoalDto {
        SalesGoalDto {
            owned_by_id: Some(owner.to_string()),
            goal_month_year: Some(month),
            sales_goal_amount: Some(Decimal::from(amount)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_goal_month() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = SalesGoalService::new(uow_as(&conn, &agent));

        let created = service
            .create_sales_goal(goal_for(&agent, date(2024, 3, 15), 500_000))
            .await
            .expect("create goal");

        assert_eq!(created.goal_month_year, Some(date(2024, 3, 1)));
    }

    #[tokio::test]
    async fn test_does_goal_exist_checks_owner_and_month() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = SalesGoalService::new(uow_as(&conn, &agent));

        let candidate = goal_for(&agent, date(2024, 3, 20), 500_000);
        assert!(!service.does_goal_exist(&candidate).await.expect("check"));

        let created = service
            .create_sales_goal(goal_for(&agent, date(2024, 3, 15), 500_000))
            .await
            .expect("create goal");

        // 同月不同日也算重复
        assert!(service.does_goal_exist(&candidate).await.expect("check"));

        // 更新路径排除记录自身
        let own_update = SalesGoalDto {
            id: created.id,
            ..goal_for(&agent, date(2024, 3, 1), 600_000)
        };
        assert!(!service.does_goal_exist(&own_update).await.expect("check"));

        // 月份缺失视为已存在，阻止保存
        let no_month = SalesGoalDto {
            owned_by_id: Some(agent.clone()),
            ..Default::default()
        };
        assert!(service.does_goal_exist(&no_month).await.expect("check"));
    }

    #[tokio::test]
    async fn test_goal_figures_only_count_sales_in_month() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let uow = uow_as(&conn, &agent);
        let (property_id, client_id) = seed_client_and_property(&uow).await;

        let sales = crate::services::sales::SaleService::new(Arc::clone(&uow));
        for (closing, price) in [
            (date(2024, 3, 5), 150_000),
            (date(2024, 3, 28), 150_000),
            (date(2024, 4, 2), 999_999),
        ] {
            sales
                .create_sale(SaleDto {
                    owned_by_id: Some(agent.clone()),
                    property_id: Some(property_id),
                    client_id: Some(client_id),
                    sale_side: SaleSide::Buyer,
                    closing_date: closing,
                    sale_price: Some(Decimal::from(price)),
                    commission_rate: Some(Decimal::new(250, 4)),
                    ..Default::default()
                })
                .await
                .expect("create sale");
        }

        let service = SalesGoalService::new(Arc::clone(&uow));
        let created = service
            .create_sales_goal(goal_for(&agent, date(2024, 3, 1), 200_000))
            .await
            .expect("create goal");

        let goal = service
            .get_sales_goal_dto_by_id(created.id)
            .await
            .expect("query")
            .expect("goal exists");

        assert_eq!(goal.total_sales(), Decimal::from(300_000));
        assert_eq!(goal.sales_goal_variance(), Decimal::from(100_000));
        assert_eq!(goal.percent_to_sales_goal(), Decimal::from(150));
    }

    #[tokio::test]
    async fn test_update_missing_goal_is_not_found() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = SalesGoalService::new(uow_as(&conn, &agent));

        let err = service
            .update_sales_goal(SalesGoalDto {
                id: 777,
                ..goal_for(&agent, date(2024, 5, 1), 100_000)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
