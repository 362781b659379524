//! # 业务闭环集成测试
//!
//! 以服务层视角走一遍经纪人日常：建档客户与房产、录入成交、设定目标并核对派生指标

use std::sync::Arc;

use chrono::NaiveDate;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, Set};

use realty_crm::persistence::{FixedCurrentUser, UnitOfWork};
use realty_crm::services::{
    ClientDto, ClientService, PropertyDto, PropertyService, SaleDto, SaleService, SalesGoalDto,
    SalesGoalService,
};

async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let conn = Database::connect(options)
        .await
        .expect("connect in-memory sqlite");
    migration::Migrator::up(&conn, None)
        .await
        .expect("run migrations");
    conn
}

async fn seed_agent(conn: &DatabaseConnection, id: &str) -> Arc<UnitOfWork> {
    let bootstrap = UnitOfWork::new(conn.clone(), Arc::new(FixedCurrentUser(None)));
    bootstrap
        .repository::<entity::Users>()
        .insert(entity::users::ActiveModel {
            id: Set(id.to_string()),
            username: Set(format!("{id}@example.com")),
            email: Set(format!("{id}@example.com")),
            first_name: Set(Some("Test".to_string())),
            last_name: Set(Some("Agent".to_string())),
            ..Default::default()
        });
    bootstrap.commit().await.expect("seed agent");

    Arc::new(UnitOfWork::new(
        conn.clone(),
        Arc::new(FixedCurrentUser(Some(id.to_string()))),
    ))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn test_agent_monthly_workflow() {
    let conn = test_db().await;
    let uow = seed_agent(&conn, "agent-1").await;

    // 建档客户与房产
    let client = ClientService::new(Arc::clone(&uow))
        .create_client(ClientDto {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            phone_number: Some("1234567890".to_string()),
            ..Default::default()
        })
        .await
        .expect("create client");
    assert_eq!(client.full_name_and_phone(), "Doe, John; Phone: 1234567890");

    let property = PropertyService::new(Arc::clone(&uow))
        .create_property(PropertyDto {
            street: Some("123 Main St".to_string()),
            city: Some("Anytown".to_string()),
            state: Some("NY".to_string()),
            zip_code: Some("12345".to_string()),
            ..Default::default()
        })
        .await
        .expect("create property");
    assert_eq!(property.full_address(), "123 Main St Anytown, NY 12345");

    // 三月两笔成交，四月一笔
    let sales = SaleService::new(Arc::clone(&uow));
    for (closing, price) in [
        (date(2024, 3, 8), 180_000),
        (date(2024, 3, 21), 120_000),
        (date(2024, 4, 2), 500_000),
    ] {
        sales
            .create_sale(SaleDto {
                owned_by_id: Some("agent-1".to_string()),
                property_id: Some(property.id),
                client_id: Some(client.id),
                closing_date: closing,
                sale_price: Some(Decimal::from(price)),
                commission_rate: Some(Decimal::new(300, 4)),
                ..Default::default()
            })
            .await
            .expect("create sale");
    }

    // 三月目标 20 万，实际 30 万
    let goals = SalesGoalService::new(Arc::clone(&uow));
    let goal = goals
        .create_sales_goal(SalesGoalDto {
            owned_by_id: Some("agent-1".to_string()),
            goal_month_year: Some(date(2024, 3, 15)),
            sales_goal_amount: Some(Decimal::from(200_000)),
            ..Default::default()
        })
        .await
        .expect("create goal");
    assert_eq!(goal.goal_month_year, Some(date(2024, 3, 1)));

    let loaded = goals
        .get_sales_goal_dto_by_id(goal.id)
        .await
        .expect("load goal")
        .expect("goal exists");
    assert_eq!(loaded.total_sales(), Decimal::from(300_000));
    assert_eq!(loaded.sales_goal_variance(), Decimal::from(100_000));
    assert_eq!(loaded.percent_to_sales_goal(), Decimal::from(150));

    // 同月第二条目标被唯一性检查拦下
    let duplicate = SalesGoalDto {
        owned_by_id: Some("agent-1".to_string()),
        goal_month_year: Some(date(2024, 3, 28)),
        sales_goal_amount: Some(Decimal::from(999)),
        ..Default::default()
    };
    assert!(goals.does_goal_exist(&duplicate).await.expect("check"));

    // 客户已被成交记录引用，外键 RESTRICT 拒绝删除
    let client_service = ClientService::new(Arc::clone(&uow));
    client_service
        .delete_client(client.id)
        .await
        .expect_err("client is referenced by sales, restrict delete");

    let sale_list = sales
        .list_sales(1, 10, Some("agent-1"))
        .await
        .expect("list sales");
    assert_eq!(sale_list.1, 3);
}
