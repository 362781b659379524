//! # 审计戳模块
//!
//! 提交前为暂存的实体写入创建/修改审计信息

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait, Set,
};

/// 当前登录用户查询接口
///
/// 生产环境由认证中间件的 `AuthContext` 实现，测试场景使用 [`FixedCurrentUser`]
pub trait CurrentUser: Send + Sync {
    /// 当前用户 id，匿名时为 None
    fn user_id(&self) -> Option<String>;
}

/// 固定用户实现，用于测试和脚本场景
#[derive(Debug, Clone)]
pub struct FixedCurrentUser(pub Option<String>);

impl CurrentUser for FixedCurrentUser {
    fn user_id(&self) -> Option<String> {
        self.0.clone()
    }
}

/// 一次提交所使用的审计信息快照
///
/// 时间与用户在提交开始时取样一次，同一事务内所有实体使用相同的戳
#[derive(Debug, Clone)]
pub struct AuditStamp {
    pub at: NaiveDateTime,
    pub by: Option<String>,
}

impl AuditStamp {
    #[must_use]
    pub fn capture(current_user: &dyn CurrentUser) -> Self {
        Self {
            at: chrono::Utc::now().naive_utc(),
            by: current_user.user_id(),
        }
    }
}

/// 可被审计戳记的 ActiveModel
///
/// 新增实体写入创建信息，修改实体写入最后修改信息；
/// 只追踪时间戳的实体（如用户表）忽略操作者字段
pub trait Audited {
    fn stamp_created(&mut self, stamp: &AuditStamp);
    fn stamp_modified(&mut self, stamp: &AuditStamp);
}

/// 通用仓储可以操作的实体类型
///
/// `EntityTrait` 自身不投影 ActiveModel 类型，这里补上这一关联，
/// 同时约束主键值可克隆、可调试打印，供删除暂存与错误信息使用
pub trait AuditedEntity: EntityTrait + 'static
where
    Self::Model: IntoActiveModel<Self::Active> + Send + Sync + 'static,
    <Self::PrimaryKey as PrimaryKeyTrait>::ValueType:
        Clone + std::fmt::Debug + Send + 'static,
{
    /// 实体对应的 ActiveModel 类型
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Audited + Send + 'static;
}

/// 为携带完整审计列的业务实体生成 `Audited` 实现并登记 ActiveModel 投影
macro_rules! impl_audited {
    ($($module:ident => $entity:ident),+ $(,)?) => {
        $(
            impl Audited for entity::$module::ActiveModel {
                fn stamp_created(&mut self, stamp: &AuditStamp) {
                    self.created = Set(Some(stamp.at));
                    self.created_by = Set(stamp.by.clone());
                }

                fn stamp_modified(&mut self, stamp: &AuditStamp) {
                    self.last_modified = Set(Some(stamp.at));
                    self.last_modified_by = Set(stamp.by.clone());
                }
            }

            impl AuditedEntity for entity::$entity {
                type Active = entity::$module::ActiveModel;
            }
        )+
    };
}

impl_audited!(
    clients => Clients,
    properties => Properties,
    sales => Sales,
    sales_goals => SalesGoals,
    appointments => Appointments,
);

impl Audited for entity::users::ActiveModel {
    fn stamp_created(&mut self, stamp: &AuditStamp) {
        self.created_at = Set(stamp.at);
        self.updated_at = Set(stamp.at);
    }

    fn stamp_modified(&mut self, stamp: &AuditStamp) {
        self.updated_at = Set(stamp.at);
    }
}

impl AuditedEntity for entity::Users {
    type Active = entity::users::ActiveModel;
}

impl Audited for entity::user_external_logins::ActiveModel {
    fn stamp_created(&mut self, stamp: &AuditStamp) {
        self.created_at = Set(stamp.at);
    }

    fn stamp_modified(&mut self, _stamp: &AuditStamp) {}
}

impl AuditedEntity for entity::UserExternalLogins {
    type Active = entity::user_external_logins::ActiveModel;
}
