//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod users;
pub mod user_external_logins;
pub mod clients;
pub mod properties;
pub mod sales;
pub mod sales_goals;
pub mod appointments;

pub use users::Entity as Users;
pub use user_external_logins::Entity as UserExternalLogins;
pub use clients::Entity as Clients;
pub use properties::Entity as Properties;
pub use sales::Entity as Sales;
pub use sales_goals::Entity as SalesGoals;
pub use appointments::Entity as Appointments;

#[cfg(test)]
mod tests;
