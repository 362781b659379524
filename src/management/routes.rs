//! # 路由配置
//!
//! 定义所有API路由和路由组织

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::management::handlers;
use crate::management::server::AppState;

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    // 业务路由统一要求认证
    let business = Router::new()
        .nest("/clients", client_routes())
        .nest("/properties", property_routes())
        .nest("/sales", sale_routes())
        .nest("/sales-goals", sales_goal_routes())
        .nest("/appointments", appointment_routes())
        .nest("/agents", agent_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::management::middleware::auth::auth,
        ));

    Router::new()
        // 健康检查路由
        .nest("/health", health_routes())
        // 外部登录路由
        .nest("/auth", auth_routes())
        .merge(business)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 健康检查路由
fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::health::health_check))
}

/// 外部登录路由
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/providers", get(handlers::auth::list_providers))
        .route(
            "/authorize/{provider}",
            get(handlers::auth::authorize_url),
        )
        .route("/callback", post(handlers::auth::external_login_callback))
}

/// 客户管理路由
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::clients::list_clients))
        .route("/", post(handlers::clients::create_client))
        .route("/{id}", get(handlers::clients::get_client))
        .route("/{id}", put(handlers::clients::update_client))
        .route("/{id}", delete(handlers::clients::delete_client))
}

/// 房产管理路由
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::properties::list_properties))
        .route("/", post(handlers::properties::create_property))
        .route("/{id}", get(handlers::properties::get_property))
        .route("/{id}", put(handlers::properties::update_property))
        .route("/{id}", delete(handlers::properties::delete_property))
}

/// 成交记录管理路由
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::sales::list_sales))
        .route("/", post(handlers::sales::create_sale))
        .route("/{id}", get(handlers::sales::get_sale))
        .route("/{id}", put(handlers::sales::update_sale))
        .route("/{id}", delete(handlers::sales::delete_sale))
}

/// 销售目标管理路由
fn sales_goal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::sales_goals::list_sales_goals))
        .route("/", post(handlers::sales_goals::create_sales_goal))
        .route("/{id}", get(handlers::sales_goals::get_sales_goal))
        .route("/{id}", put(handlers::sales_goals::update_sales_goal))
        .route("/{id}", delete(handlers::sales_goals::delete_sales_goal))
}

/// 日程管理路由
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::appointments::list_appointments))
        .route("/", post(handlers::appointments::create_appointment))
        .route("/{id}", get(handlers::appointments::get_appointment))
        .route("/{id}", put(handlers::appointments::update_appointment))
        .route(
            "/{id}",
            delete(handlers::appointments::delete_appointment),
        )
}

/// 经纪人查询路由
fn agent_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::auth::list_agents))
        .route("/me", get(handlers::auth::current_agent))
}
