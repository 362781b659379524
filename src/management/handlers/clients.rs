//! # 客户管理处理器

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::management::middleware::AuthContext;
use crate::management::pagination::{PaginationParams, build_page};
use crate::management::response::ApiResponse;
use crate::management::server::AppState;
use crate::services::{ClientDto, ClientService};

/// 客户列表查询参数
#[derive(Debug, Deserialize)]
pub struct ClientQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// 按姓氏模糊过滤
    pub search: Option<String>,
}

fn service(state: &AppState, auth: Arc<AuthContext>) -> ClientService {
    ClientService::new(state.unit_of_work(auth))
}

/// 列出客户
pub async fn list_clients(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Query(query): Query<ClientQuery>,
) -> ApiResponse<ClientDto> {
    let params = PaginationParams::new(query.page, query.limit, 20, 100);
    match service(&state, auth)
        .list_clients(params.page, params.limit, query.search.as_deref())
        .await
    {
        Ok((rows, total)) => ApiResponse::Paginated(rows, build_page(total, params)),
        Err(err) => err.into(),
    }
}

/// 查询单个客户
pub async fn get_client(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<ClientDto> {
    match service(&state, auth).get_client_dto_by_id(id).await {
        Ok(Some(dto)) => ApiResponse::Success(dto),
        Ok(None) => AppError::not_found("client", id.to_string()).into(),
        Err(err) => err.into(),
    }
}

/// 创建客户
pub async fn create_client(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Json(dto): Json<ClientDto>,
) -> ApiResponse<ClientDto> {
    match service(&state, auth).create_client(dto).await {
        Ok(created) => ApiResponse::SuccessWithMessage(created, "客户创建成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 更新客户
pub async fn update_client(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(mut dto): Json<ClientDto>,
) -> ApiResponse<ClientDto> {
    dto.id = id;
    match service(&state, auth).update_client(dto).await {
        Ok(updated) => ApiResponse::SuccessWithMessage(updated, "客户更新成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 删除客户
pub async fn delete_client(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    match service(&state, auth).delete_client(id).await {
        Ok(()) => ApiResponse::SuccessWithoutData("客户已删除".to_string()),
        Err(err) => err.into(),
    }
}
