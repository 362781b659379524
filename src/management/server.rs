//! # 管理服务器
//!
//! 应用状态与 HTTP 服务入口

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::{AppConfig, ServerConfig};
use crate::error::Result;
use crate::identity::{JwtManager, OAuthClient};
use crate::management::routes::create_routes;
use crate::persistence::{CurrentUser, UnitOfWork};

/// 应用状态，注入到所有处理器
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    config: Arc<AppConfig>,
    jwt: Arc<JwtManager>,
    oauth: Arc<OAuthClient>,
}

impl AppState {
    #[must_use]
    pub fn new(db: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        let jwt = Arc::new(JwtManager::new(&config.auth));
        let oauth = Arc::new(OAuthClient::new(&config.oauth));
        Self {
            db,
            config,
            jwt,
            oauth,
        }
    }

    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    #[must_use]
    pub const fn jwt(&self) -> &Arc<JwtManager> {
        &self.jwt
    }

    #[must_use]
    pub const fn oauth(&self) -> &Arc<OAuthClient> {
        &self.oauth
    }

    /// 为一次请求创建工作单元
    #[must_use]
    pub fn unit_of_work(&self, current_user: Arc<dyn CurrentUser>) -> Arc<UnitOfWork> {
        Arc::new(UnitOfWork::new(self.db.clone(), current_user))
    }
}

/// 管理服务器
pub struct ManagementServer {
    config: ServerConfig,
    state: AppState,
}

impl ManagementServer {
    #[must_use]
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { config, state }
    }

    /// 启动 HTTP 服务并阻塞至退出
    pub async fn serve(self) -> Result<()> {
        let app = create_routes(self.state);
        let address = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&address).await?;
        info!("管理服务器监听于 http://{address}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
