//! # 房产管理处理器

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::management::middleware::AuthContext;
use crate::management::pagination::{PaginationParams, build_page};
use crate::management::response::ApiResponse;
use crate::management::server::AppState;
use crate::services::{PropertyDto, PropertyService};

/// 房产列表查询参数
#[derive(Debug, Deserialize)]
pub struct PropertyQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// 按城市模糊过滤
    pub search: Option<String>,
}

fn service(state: &AppState, auth: Arc<AuthContext>) -> PropertyService {
    PropertyService::new(state.unit_of_work(auth))
}

/// 列出房产
pub async fn list_properties(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Query(query): Query<PropertyQuery>,
) -> ApiResponse<PropertyDto> {
    let params = PaginationParams::new(query.page, query.limit, 20, 100);
    match service(&state, auth)
        .list_properties(params.page, params.limit, query.search.as_deref())
        .await
    {
        Ok((rows, total)) => ApiResponse::Paginated(rows, build_page(total, params)),
        Err(err) => err.into(),
    }
}

/// 查询单个房产
pub async fn get_property(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<PropertyDto> {
    match service(&state, auth).get_property_dto_by_id(id).await {
        Ok(Some(dto)) => ApiResponse::Success(dto),
        Ok(None) => AppError::not_found("property", id.to_string()).into(),
        Err(err) => err.into(),
    }
}

/// 创建房产
pub async fn create_property(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Json(dto): Json<PropertyDto>,
) -> ApiResponse<PropertyDto> {
    match service(&state, auth).create_property(dto).await {
        Ok(created) => ApiResponse::SuccessWithMessage(created, "房产创建成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 更新房产
pub async fn update_property(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(mut dto): Json<PropertyDto>,
) -> ApiResponse<PropertyDto> {
    dto.id = id;
    match service(&state, auth).update_property(dto).await {
        Ok(updated) => ApiResponse::SuccessWithMessage(updated, "房产更新成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 删除房产
pub async fn delete_property(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    match service(&state, auth).delete_property(id).await {
        Ok(()) => ApiResponse::SuccessWithoutData("房产已删除".to_string()),
        Err(err) => err.into(),
    }
}
