//! # 身份模块
//!
//! 外部 OAuth 登录、本地用户建档与 JWT 会话签发

use serde::{Deserialize, Serialize};

pub mod jwt;
pub mod oauth;
pub mod service;

pub use jwt::{JwtClaims, JwtManager};
pub use oauth::OAuthClient;
pub use service::{AuthenticationOutcome, AuthenticationStatus, IdentityService, UserDto};

/// 从外部提供商取回的登录身份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLoginInfo {
    /// 提供商名称，如 "google"
    pub provider: String,
    /// 提供商侧的用户唯一标识
    pub provider_key: String,
    /// 邮箱声明；新建本地账号时必需
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
