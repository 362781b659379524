//! # 服务层
//!
//! 每个业务特性一个服务：在通用服务基类上封装命名操作与 DTO 映射

pub mod appointments;
pub mod base;
pub mod clients;
pub mod properties;
pub mod sales;
pub mod sales_goals;
pub mod validation;

pub use appointments::{AppointmentDto, AppointmentService};
pub use base::{EntityDto, ServiceBase};
pub use clients::{ClientDto, ClientService};
pub use properties::{PropertyDto, PropertyService};
pub use sales::{SaleDto, SaleService};
pub use sales_goals::{SalesGoalDto, SalesGoalService};
