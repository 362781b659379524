//! # 认证中间件
//!
//! 从请求头中提取JWT，验证并将解析的用户信息注入到请求扩展中。

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::management::server::AppState;
use crate::persistence::CurrentUser;

/// 包含认证用户信息的上下文
///
/// 同时充当审计戳的当前用户来源
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub username: String,
}

impl CurrentUser for AuthContext {
    fn user_id(&self) -> Option<String> {
        Some(self.user_id.clone())
    }
}

/// 从 `Authorization` 头取出 Bearer Token
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum认证中间件
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let Some(token) = extract_bearer_token(auth_header) else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    match state.jwt().validate_token(token) {
        Ok(claims) => {
            let auth_context = Arc::new(AuthContext {
                user_id: claims.sub,
                username: claims.username,
            });
            request.extensions_mut().insert(auth_context);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }
}
