//! # 管理端模块
//!
//! HTTP API：路由、响应封装、认证中间件与各特性处理器

pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod server;

pub use server::{AppState, ManagementServer};
