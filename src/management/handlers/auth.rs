//! # 外部登录与经纪人查询处理器

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::identity::{AuthenticationOutcome, AuthenticationStatus, IdentityService, UserDto};
use crate::management::middleware::AuthContext;
use crate::management::response::ApiResponse;
use crate::management::server::AppState;
use crate::persistence::FixedCurrentUser;

/// 授权跳转查询参数
#[derive(Debug, Deserialize)]
pub struct AuthorizeQuery {
    /// 透传的防 CSRF state
    pub state: Option<String>,
}

/// 授权码回调请求
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub provider: String,
    pub code: String,
}

/// 登录流程中尚无认证身份，审计上下文固定为匿名
fn identity_service(state: &AppState) -> IdentityService {
    IdentityService::new(
        state.unit_of_work(Arc::new(FixedCurrentUser(None))),
        Arc::clone(state.jwt()),
    )
}

/// 列出可用的登录提供商
pub async fn list_providers(State(state): State<AppState>) -> ApiResponse<Vec<String>> {
    ApiResponse::Success(state.oauth().provider_names())
}

/// 构造跳转到提供商的授权地址
pub async fn authorize_url(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<AuthorizeQuery>,
) -> ApiResponse<String> {
    match state
        .oauth()
        .authorize_url(&provider, query.state.as_deref().unwrap_or_default())
    {
        Ok(url) => ApiResponse::Success(url),
        Err(err) => err.into(),
    }
}

/// 授权码回调：换取令牌、拉取用户信息并完成本地登录
pub async fn external_login_callback(
    State(state): State<AppState>,
    Json(request): Json<CallbackRequest>,
) -> ApiResponse<AuthenticationOutcome> {
    let login = match state
        .oauth()
        .complete_login(&request.provider, &request.code)
        .await
    {
        Ok(login) => login,
        Err(err) => return err.into(),
    };

    match identity_service(&state).process_external_login(&login).await {
        Ok(outcome) if outcome.status == AuthenticationStatus::Failure => ApiResponse::Error(
            StatusCode::UNAUTHORIZED,
            "EXTERNAL_LOGIN_FAILED".to_string(),
            outcome.errors.join("; "),
        ),
        Ok(outcome) => ApiResponse::Success(outcome),
        Err(err) => err.into(),
    }
}

/// 列出全部经纪人
pub async fn list_agents(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
) -> ApiResponse<Vec<UserDto>> {
    let service = IdentityService::new(state.unit_of_work(auth), Arc::clone(state.jwt()));
    match service.get_all_agents().await {
        Ok(agents) => ApiResponse::Success(agents),
        Err(err) => err.into(),
    }
}

/// 当前登录经纪人
pub async fn current_agent(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
) -> ApiResponse<UserDto> {
    let user_id = auth.user_id.clone();
    let service = IdentityService::new(state.unit_of_work(auth), Arc::clone(state.jwt()));
    match service.get_user_dto_by_id(&user_id).await {
        Ok(Some(user)) => ApiResponse::Success(user),
        Ok(None) => crate::error::AppError::not_found("user", user_id).into(),
        Err(err) => err.into(),
    }
}
