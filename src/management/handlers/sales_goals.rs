//! # 销售目标管理处理器
//!
//! 返回的视图中带派生指标；新增/更新前做 (经纪人, 月份) 唯一性检查

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::management::middleware::AuthContext;
use crate::management::pagination::PaginationParams;
use crate::management::response::{ApiResponse, Pagination};
use crate::management::server::AppState;
use crate::services::{SalesGoalDto, SalesGoalService};

/// 销售目标列表查询参数
#[derive(Debug, Deserialize)]
pub struct SalesGoalQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// 销售目标视图，携带派生指标
#[derive(Debug, Serialize)]
pub struct SalesGoalView {
    pub id: i32,
    pub owned_by_id: Option<String>,
    pub goal_month_year: Option<NaiveDate>,
    pub sales_goal_amount: Option<Decimal>,
    pub total_sales: Decimal,
    pub sales_goal_variance: Decimal,
    pub percent_to_sales_goal: Decimal,
}

impl From<SalesGoalDto> for SalesGoalView {
    fn from(dto: SalesGoalDto) -> Self {
        Self {
            total_sales: dto.total_sales(),
            sales_goal_variance: dto.sales_goal_variance(),
            percent_to_sales_goal: dto.percent_to_sales_goal(),
            id: dto.id,
            owned_by_id: dto.owned_by_id,
            goal_month_year: dto.goal_month_year,
            sales_goal_amount: dto.sales_goal_amount,
        }
    }
}

fn service(state: &AppState, auth: Arc<AuthContext>) -> SalesGoalService {
    SalesGoalService::new(state.unit_of_work(auth))
}

fn duplicate_goal_error(dto: &SalesGoalDto) -> AppError {
    AppError::conflict(
        "sales_goal",
        format!(
            "{} {}",
            dto.owned_by_id.as_deref().unwrap_or_default(),
            dto.goal_month_year
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_default()
        ),
    )
}

/// 列出销售目标（含派生指标），分页在内存列表上进行
pub async fn list_sales_goals(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Query(query): Query<SalesGoalQuery>,
) -> ApiResponse<SalesGoalView> {
    let params = PaginationParams::new(query.page, query.limit, 20, 100);
    match service(&state, auth).get_all_sales_goal_dtos().await {
        Ok(dtos) => {
            let total = dtos.len() as u64;
            let pages = if total == 0 {
                0
            } else {
                total.div_ceil(params.limit)
            };
            let rows: Vec<SalesGoalView> = dtos
                .into_iter()
                .skip(usize::try_from(params.offset()).unwrap_or(usize::MAX))
                .take(usize::try_from(params.limit).unwrap_or(usize::MAX))
                .map(SalesGoalView::from)
                .collect();
            ApiResponse::Paginated(
                rows,
                Pagination {
                    page: params.page,
                    limit: params.limit,
                    total,
                    pages,
                },
            )
        }
        Err(err) => err.into(),
    }
}

/// 查询单条销售目标（含派生指标）
pub async fn get_sales_goal(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<SalesGoalView> {
    match service(&state, auth).get_sales_goal_dto_by_id(id).await {
        Ok(Some(dto)) => ApiResponse::Success(dto.into()),
        Ok(None) => AppError::not_found("sales_goal", id.to_string()).into(),
        Err(err) => err.into(),
    }
}

/// 创建销售目标；同一经纪人同一月份只允许一条
pub async fn create_sales_goal(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Json(dto): Json<SalesGoalDto>,
) -> ApiResponse<SalesGoalView> {
    let service = service(&state, auth);
    match service.does_goal_exist(&dto).await {
        Ok(true) => return duplicate_goal_error(&dto).into(),
        Ok(false) => {}
        Err(err) => return err.into(),
    }
    match service.create_sales_goal(dto).await {
        Ok(created) => {
            ApiResponse::SuccessWithMessage(created.into(), "销售目标创建成功".to_string())
        }
        Err(err) => err.into(),
    }
}

/// 更新销售目标；唯一性检查排除记录自身
pub async fn update_sales_goal(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(mut dto): Json<SalesGoalDto>,
) -> ApiResponse<SalesGoalView> {
    dto.id = id;
    let service = service(&state, auth);
    match service.does_goal_exist(&dto).await {
        Ok(true) => return duplicate_goal_error(&dto).into(),
        Ok(false) => {}
        Err(err) => return err.into(),
    }
    match service.update_sales_goal(dto).await {
        Ok(updated) => {
            ApiResponse::SuccessWithMessage(updated.into(), "销售目标更新成功".to_string())
        }
        Err(err) => err.into(),
    }
}

/// 删除销售目标
pub async fn delete_sales_goal(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    match service(&state, auth).delete_sales_goal(id).await {
        Ok(()) => ApiResponse::SuccessWithoutData("销售目标已删除".to_string()),
        Err(err) => err.into(),
    }
}
