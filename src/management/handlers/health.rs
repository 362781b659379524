//! # 健康检查处理器

use axum::extract::State;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;

use crate::management::response::ApiResponse;
use crate::management::server::AppState;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

/// 健康检查：验证数据库可达
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthStatus> {
    let db_ok = state
        .db()
        .execute(Statement::from_string(
            state.db().get_database_backend(),
            "SELECT 1".to_string(),
        ))
        .await
        .is_ok();

    ApiResponse::Success(HealthStatus {
        status: if db_ok { "healthy" } else { "degraded" },
        database: if db_ok { "up" } else { "down" },
    })
}
