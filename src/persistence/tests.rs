//! # 持久化层测试
//!
//! 使用内存 SQLite 验证仓储暂存、工作单元提交与审计戳

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, IntoActiveModel, PaginatorTrait, Set};

use crate::testing::{seed_agent, test_db, uow_as};

fn client_model(first: &str, last: &str, phone: &str) -> entity::clients::ActiveModel {
    entity::clients::ActiveModel {
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        phone_number: Set(phone.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_insert_then_get_by_id_round_trip() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.insert(client_model("John", "Doe", "1234567890"));
    uow.commit().await.expect("commit insert");

    let inserted = clients.take_flushed().pop().expect("inserted model");
    let fetched = clients
        .get_by_id(inserted.id)
        .await
        .expect("query by id")
        .expect("client exists");

    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.first_name, "John");
    assert_eq!(fetched.last_name, "Doe");
    assert_eq!(fetched.phone_number, "1234567890");
}

#[tokio::test]
async fn test_nothing_persists_before_commit() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.insert(client_model("John", "Doe", "1234567890"));

    let count = entity::Clients::find()
        .count(&conn)
        .await
        .expect("count clients");
    assert_eq!(count, 0);

    uow.commit().await.expect("commit");
    let count = entity::Clients::find()
        .count(&conn)
        .await
        .expect("count clients");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.insert(client_model("John", "Doe", "1234567890"));
    uow.commit().await.expect("commit insert");
    let inserted = clients.take_flushed().pop().expect("inserted model");

    clients.delete(inserted.id);
    uow.commit().await.expect("commit delete");

    let fetched = clients.get_by_id(inserted.id).await.expect("query by id");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_delete_missing_id_is_silent_noop() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.delete(9999);
    uow.commit().await.expect("deleting a missing row must not fail");
}

#[tokio::test]
async fn test_repository_cached_per_entity_type() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let first = uow.repository::<entity::Clients>();
    let second = uow.repository::<entity::Clients>();
    assert!(Arc::ptr_eq(&first, &second));

    // 不同实体类型各自独立
    let properties = uow.repository::<entity::Properties>();
    properties.insert(entity::properties::ActiveModel {
        street: Set("123 Main St".to_string()),
        city: Set("Anytown".to_string()),
        state: Set("NY".to_string()),
        zip_code: Set("12345".to_string()),
        ..Default::default()
    });
    first.insert(client_model("John", "Doe", "1234567890"));
    uow.commit().await.expect("commit both repositories");

    assert_eq!(
        entity::Clients::find().count(&conn).await.expect("count"),
        1
    );
    assert_eq!(
        entity::Properties::find().count(&conn).await.expect("count"),
        1
    );
}

#[tokio::test]
async fn test_insert_stamps_created_audit_fields() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.insert(client_model("John", "Doe", "1234567890"));
    uow.commit().await.expect("commit insert");
    let inserted = clients.take_flushed().pop().expect("inserted model");

    assert!(inserted.created.is_some());
    assert_eq!(inserted.created_by.as_deref(), Some("agent-1"));
    assert!(inserted.last_modified.is_none());
    assert!(inserted.last_modified_by.is_none());
}

#[tokio::test]
async fn test_update_stamps_last_modified_only() {
    let conn = test_db().await;
    let agent = seed_agent(&conn, "agent-1").await;
    let uow = uow_as(&conn, &agent);

    let clients = uow.repository::<entity::Clients>();
    clients.insert(client_model("John", "Doe", "1234567890"));
    uow.commit().await.expect("commit insert");
    let inserted = clients.take_flushed().pop().expect("inserted model");
    let created = inserted.created;

    let mut active = inserted.clone().into_active_model();
    active.phone_number = Set("0987654321".to_string());
    clients.update(active);
    uow.commit().await.expect("commit update");

    let updated = clients
        .get_by_id(inserted.id)
        .await
        .expect("query by id")
        .expect("client exists");

    assert_eq!(updated.phone_number, "0987654321");
    assert_eq!(updated.created, created);
    assert_eq!(updated.created_by.as_deref(), Some("agent-1"));
    assert!(updated.last_modified.is_some());
    assert_eq!(updated.last_modified_by.as_deref(), Some("agent-1"));
}
