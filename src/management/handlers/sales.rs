//! # 成交记录管理处理器

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::management::middleware::AuthContext;
use crate::management::pagination::{PaginationParams, build_page};
use crate::management::response::ApiResponse;
use crate::management::server::AppState;
use crate::services::{SaleDto, SaleService};

/// 成交列表查询参数
#[derive(Debug, Deserialize)]
pub struct SaleQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// 只看某个经纪人名下的成交
    pub owner: Option<String>,
}

fn service(state: &AppState, auth: Arc<AuthContext>) -> SaleService {
    SaleService::new(state.unit_of_work(auth))
}

/// 列出成交记录
pub async fn list_sales(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Query(query): Query<SaleQuery>,
) -> ApiResponse<SaleDto> {
    let params = PaginationParams::new(query.page, query.limit, 20, 100);
    match service(&state, auth)
        .list_sales(params.page, params.limit, query.owner.as_deref())
        .await
    {
        Ok((rows, total)) => ApiResponse::Paginated(rows, build_page(total, params)),
        Err(err) => err.into(),
    }
}

/// 查询单条成交记录
pub async fn get_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<SaleDto> {
    match service(&state, auth).get_sale_dto_by_id(id).await {
        Ok(Some(dto)) => ApiResponse::Success(dto),
        Ok(None) => AppError::not_found("sale", id.to_string()).into(),
        Err(err) => err.into(),
    }
}

/// 创建成交记录
pub async fn create_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Json(dto): Json<SaleDto>,
) -> ApiResponse<SaleDto> {
    match service(&state, auth).create_sale(dto).await {
        Ok(created) => ApiResponse::SuccessWithMessage(created, "成交记录创建成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 更新成交记录
pub async fn update_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(mut dto): Json<SaleDto>,
) -> ApiResponse<SaleDto> {
    dto.id = id;
    match service(&state, auth).update_sale(dto).await {
        Ok(updated) => ApiResponse::SuccessWithMessage(updated, "成交记录更新成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 删除成交记录
pub async fn delete_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    match service(&state, auth).delete_sale(id).await {
        Ok(()) => ApiResponse::SuccessWithoutData("成交记录已删除".to_string()),
        Err(err) => err.into(),
    }
}
