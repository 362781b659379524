//! # 应用配置结构定义

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 应用主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// 管理服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 认证配置
    #[serde(default)]
    pub auth: AuthConfig,
    /// 外部登录提供商配置，键为提供商名（如 "google"）
    #[serde(default)]
    pub oauth: OAuthConfig,
}

/// 管理服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8090,
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库连接URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/realty.db".to_string(),
        }
    }
}

/// 认证配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT签名密钥
    pub jwt_secret: String,
    /// 访问令牌有效期（小时）
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "dev-only-secret-change-me".to_string(),
            token_ttl_hours: 24,
        }
    }
}

/// 外部登录提供商集合
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OAuthConfig {
    /// 提供商名 -> 提供商配置
    #[serde(default)]
    pub providers: HashMap<String, OAuthProviderConfig>,
}

/// 单个 OAuth 提供商配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// 授权范围，空则使用提供商默认
    #[serde(default)]
    pub scope: Option<String>,
    pub redirect_uri: String,
}
