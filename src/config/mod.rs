//! # 配置模块
//!
//! TOML 配置文件加载与环境变量覆盖

use std::env;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Context, Result};

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, DatabaseConfig, OAuthConfig, OAuthProviderConfig, ServerConfig,
};

/// 默认配置文件路径
const DEFAULT_CONFIG_PATH: &str = "config/realty.toml";

impl AppConfig {
    /// 加载应用配置
    ///
    /// 查找顺序：`REALTY_CRM_CONFIG` 环境变量指定的路径 > 默认路径；
    /// 文件不存在时使用内置默认值。`DATABASE_URL` 始终可覆盖数据库地址。
    pub fn load() -> Result<Self> {
        let path = env::var("REALTY_CRM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("读取配置文件失败: {path}"))?;
            let config: Self =
                toml::from_str(&raw).with_context(|| format!("解析配置文件失败: {path}"))?;
            info!("配置文件加载成功: {path}");
            config
        } else {
            warn!("配置文件不存在，使用默认配置: {path}");
            Self::default()
        };

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8090);
        assert!(config.database.url.starts_with("sqlite:"));
        assert!(config.oauth.providers.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let raw = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "sqlite://test.db"

            [auth]
            jwt_secret = "secret"
            token_ttl_hours = 8

            [oauth.providers.google]
            client_id = "id"
            client_secret = "secret"
            auth_url = "https://accounts.google.com/o/oauth2/auth"
            token_url = "https://oauth2.googleapis.com/token"
            userinfo_url = "https://www.googleapis.com/oauth2/v2/userinfo"
            redirect_uri = "http://localhost:8090/auth/callback/google"
        "#;

        let config: AppConfig = toml::from_str(raw).expect("valid toml");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.token_ttl_hours, 8);
        assert!(config.oauth.providers.contains_key("google"));
    }

    #[test]
    #[serial]
    fn test_load_reads_file_and_database_url_override() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("realty.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[database]\nurl = \"sqlite://from-file.db\"\n",
        )
        .expect("write config file");

        #[allow(unsafe_code)]
        unsafe {
            env::set_var("REALTY_CRM_CONFIG", path.to_str().expect("utf-8 path"));
            env::set_var("DATABASE_URL", "sqlite://from-env.db");
        }

        let config = AppConfig::load().expect("load config");

        #[allow(unsafe_code)]
        unsafe {
            env::remove_var("REALTY_CRM_CONFIG");
            env::remove_var("DATABASE_URL");
        }

        assert_eq!(config.server.port, 9000);
        // DATABASE_URL 始终覆盖文件中的数据库地址
        assert_eq!(config.database.url, "sqlite://from-env.db");
    }
}
