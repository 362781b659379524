//! # 日程管理处理器

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::management::middleware::AuthContext;
use crate::management::pagination::{PaginationParams, build_page};
use crate::management::response::ApiResponse;
use crate::management::server::AppState;
use crate::services::{AppointmentDto, AppointmentService};

/// 日程列表查询参数
#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

fn service(state: &AppState, auth: Arc<AuthContext>) -> AppointmentService {
    AppointmentService::new(state.unit_of_work(auth))
}

/// 列出日程
pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Query(query): Query<AppointmentQuery>,
) -> ApiResponse<AppointmentDto> {
    let params = PaginationParams::new(query.page, query.limit, 20, 100);
    match service(&state, auth)
        .list_appointments(params.page, params.limit)
        .await
    {
        Ok((rows, total)) => ApiResponse::Paginated(rows, build_page(total, params)),
        Err(err) => err.into(),
    }
}

/// 查询单条日程
pub async fn get_appointment(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<AppointmentDto> {
    match service(&state, auth).get_appointment_dto_by_id(id).await {
        Ok(Some(dto)) => ApiResponse::Success(dto),
        Ok(None) => AppError::not_found("appointment", id.to_string()).into(),
        Err(err) => err.into(),
    }
}

/// 创建日程
pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Json(dto): Json<AppointmentDto>,
) -> ApiResponse<AppointmentDto> {
    match service(&state, auth).create_appointment(dto).await {
        Ok(created) => ApiResponse::SuccessWithMessage(created, "日程创建成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 更新日程
pub async fn update_appointment(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(mut dto): Json<AppointmentDto>,
) -> ApiResponse<AppointmentDto> {
    dto.id = id;
    match service(&state, auth).update_appointment(dto).await {
        Ok(updated) => ApiResponse::SuccessWithMessage(updated, "日程更新成功".to_string()),
        Err(err) => err.into(),
    }
}

/// 删除日程
pub async fn delete_appointment(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    match service(&state, auth).delete_appointment(id).await {
        Ok(()) => ApiResponse::SuccessWithoutData("日程已删除".to_string()),
        Err(err) => err.into(),
    }
}
