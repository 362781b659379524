//! # 管理端处理器

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod health;
pub mod properties;
pub mod sales;
pub mod sales_goals;
