//! # 持久化层
//!
//! 通用仓储 + 工作单元 + 审计戳

pub mod audit;
pub mod repository;
pub mod unit_of_work;

pub use audit::{AuditStamp, Audited, AuditedEntity, CurrentUser, FixedCurrentUser};
pub use repository::Repository;
pub use unit_of_work::UnitOfWork;

#[cfg(test)]
mod tests;
