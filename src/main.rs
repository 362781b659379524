//! # Realty CRM 主程序
//!
//! 房产经纪人后台服务 - 基于 axum 与 Sea-ORM

use std::sync::Arc;

use tracing::{error, info};

use realty_crm::config::AppConfig;
use realty_crm::error::{AppError, Result};
use realty_crm::management::{AppState, ManagementServer};
use realty_crm::{database, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    // 加载配置
    let config = Arc::new(AppConfig::load()?);

    // 初始化数据库并执行迁移
    let db = database::init_database(&config.database.url)
        .await
        .map_err(|e| AppError::database_with_source("数据库连接失败", e))?;
    database::run_migrations(&db)
        .await
        .map_err(|e| AppError::database_with_source("数据库迁移失败", e))?;

    // 启动管理服务器
    info!("服务启动");
    let server = ManagementServer::new(
        AppState::new(db, Arc::clone(&config)),
        config.server.clone(),
    );
    if let Err(e) = server.serve().await {
        error!("服务启动失败: {e:?}");
        std::process::exit(1);
    }

    info!("服务正常关闭");
    Ok(())
}
