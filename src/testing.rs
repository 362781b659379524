//! # 测试辅助
//!
//! 内存数据库与常用种子数据

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use crate::persistence::{FixedCurrentUser, UnitOfWork};

/// 创建一个跑完全部迁移的内存数据库
///
/// 连接池固定为单连接，保证 `:memory:` 数据库在整个测试内共享
pub(crate) async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let conn = Database::connect(options)
        .await
        .expect("connect in-memory sqlite");
    ::migration::Migrator::up(&conn, None)
        .await
        .expect("run migrations");
    conn
}

/// 插入一个经纪人用户并返回其 id
pub(crate) async fn seed_agent(conn: &DatabaseConnection, id: &str) -> String {
    let uow = UnitOfWork::new(conn.clone(), Arc::new(FixedCurrentUser(None)));
    let users = uow.repository::<entity::Users>();
    users.insert(entity::users::ActiveModel {
        id: Set(id.to_string()),
        username: Set(format!("{id}@example.com")),
        email: Set(format!("{id}@example.com")),
        first_name: Set(Some("Test".to_string())),
        last_name: Set(Some("Agent".to_string())),
        ..Default::default()
    });
    uow.commit().await.expect("seed agent");
    id.to_string()
}

/// 以固定用户身份创建一个工作单元
pub(crate) fn uow_as(conn: &DatabaseConnection, user: &str) -> Arc<UnitOfWork> {
    Arc::new(UnitOfWork::new(
        conn.clone(),
        Arc::new(FixedCurrentUser(Some(user.to_string()))),
    ))
}

/// 插入成交记录所需的房产与客户，返回 (property_id, client_id)
pub(crate) async fn seed_client_and_property(uow: &Arc<UnitOfWork>) -> (i32, i32) {
    let properties = uow.repository::<entity::Properties>();
    properties.insert(entity::properties::ActiveModel {
        street: Set("123 Main St".to_string()),
        city: Set("Anytown".to_string()),
        state: Set("NY".to_string()),
        zip_code: Set("12345".to_string()),
        ..Default::default()
    });
    let clients = uow.repository::<entity::Clients>();
    clients.insert(entity::clients::ActiveModel {
        first_name: Set("John".to_string()),
        last_name: Set("Doe".to_string()),
        phone_number: Set("1234567890".to_string()),
        ..Default::default()
    });
    uow.commit().await.expect("seed client and property");

    let property = properties.take_flushed().pop().expect("property inserted");
    let client = clients.take_flushed().pop().expect("client inserted");
    (property.id, client.id)
}
