//! # 身份服务
//!
//! 外部登录的单趟处理流程：已绑定账号直接登录，否则建档并绑定

use std::sync::Arc;

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use entity::{user_external_logins, users};

use super::jwt::JwtManager;
use super::ExternalLoginInfo;
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 认证结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationStatus {
    /// 既有账号登录成功
    Success,
    /// 新建本地账号并登录成功
    NewAccountCreated,
    /// 登录失败
    Failure,
}

/// 认证结果
///
/// 失败原因以可读文本收集在 `errors` 中，不以错误形式抛出
#[derive(Debug, Serialize)]
pub struct AuthenticationOutcome {
    pub status: AuthenticationStatus,
    pub errors: Vec<String>,
    pub token: Option<String>,
    pub user: Option<UserDto>,
}

impl AuthenticationOutcome {
    fn signed_in(status: AuthenticationStatus, token: String, user: UserDto) -> Self {
        Self {
            status,
            errors: Vec::new(),
            token: Some(token),
            user: Some(user),
        }
    }

    fn failure(errors: Vec<String>) -> Self {
        Self {
            status: AuthenticationStatus::Failure,
            errors,
            token: None,
            user: None,
        }
    }
}

/// 用户 DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
}

impl From<&users::Model> for UserDto {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id.clone(),
            username: model.username.clone(),
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            full_name: model.full_name(),
        }
    }
}

/// 身份服务
pub struct IdentityService {
    uow: Arc<UnitOfWork>,
    jwt: Arc<JwtManager>,
}

impl IdentityService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>, jwt: Arc<JwtManager>) -> Self {
        Self { uow, jwt }
    }

    /// 处理一次外部登录
    ///
    /// 流程单趟走完，不重试：
    /// 1. 外部身份已绑定本地账号 -> 直接登录；
    /// 2. 提供商未返回邮箱 -> 失败；
    /// 3. 新建本地账号并绑定外部身份 -> 登录；建档失败时收集原因返回失败。
    pub async fn process_external_login(
        &self,
        login: &ExternalLoginInfo,
    ) -> Result<AuthenticationOutcome> {
        if let Some(user) = self.find_linked_user(login).await? {
            info!(provider = %login.provider, user_id = %user.id, "外部登录命中既有账号");
            let token = self.jwt.generate_token(&user.id, &user.username)?;
            return Ok(AuthenticationOutcome::signed_in(
                AuthenticationStatus::Success,
                token,
                UserDto::from(&user),
            ));
        }

        self.create_and_sign_in(login).await
    }

    /// 列出全部经纪人，供归属选择使用
    pub async fn get_all_agents(&self) -> Result<Vec<UserDto>> {
        let models = entity::Users::find()
            .order_by_asc(users::Column::Username)
            .all(self.uow.connection())
            .await?;
        Ok(models.iter().map(UserDto::from).collect())
    }

    /// 按 id 查询用户
    pub async fn get_user_dto_by_id(&self, id: &str) -> Result<Option<UserDto>> {
        let model = self
            .uow
            .repository::<entity::Users>()
            .get_by_id(id.to_string())
            .await?;
        Ok(model.as_ref().map(UserDto::from))
    }

    async fn find_linked_user(&self, login: &ExternalLoginInfo) -> Result<Option<users::Model>> {
        let linked = entity::UserExternalLogins::find()
            .filter(user_external_logins::Column::Provider.eq(login.provider.as_str()))
            .filter(user_external_logins::Column::ProviderKey.eq(login.provider_key.as_str()))
            .find_also_related(entity::Users)
            .one(self.uow.connection())
            .await?;
        Ok(linked.and_then(|(_, user)| user))
    }

    async fn create_and_sign_in(&self, login: &ExternalLoginInfo) -> Result<AuthenticationOutcome> {
        let Some(email) = login.email.as_deref().filter(|e| !e.trim().is_empty()) else {
            let message = "外部提供商未返回邮箱，无法创建账号".to_string();
            warn!(provider = %login.provider, "{message}");
            return Ok(AuthenticationOutcome::failure(vec![message]));
        };

        // 建档前查重，把冲突作为可读失败原因返回而不是抛错
        let taken = entity::Users::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(email))
                    .add(users::Column::Username.eq(email)),
            )
            .count(self.uow.connection())
            .await?;
        if taken > 0 {
            let message = format!("邮箱 {email} 已被其他账号使用");
            warn!(provider = %login.provider, "{message}");
            return Ok(AuthenticationOutcome::failure(vec![message]));
        }

        let user_id = Uuid::new_v4().to_string();
        let users_repo = self.uow.repository::<entity::Users>();
        users_repo.insert(users::ActiveModel {
            id: Set(user_id.clone()),
            username: Set(email.to_string()),
            email: Set(email.to_string()),
            first_name: Set(login.first_name.clone()),
            last_name: Set(login.last_name.clone()),
            ..Default::default()
        });

        let logins_repo = self.uow.repository::<entity::UserExternalLogins>();
        logins_repo.insert(user_external_logins::ActiveModel {
            user_id: Set(user_id.clone()),
            provider: Set(login.provider.clone()),
            provider_key: Set(login.provider_key.clone()),
            ..Default::default()
        });

        self.uow.commit().await?;
        let user = users_repo
            .take_flushed()
            .pop()
            .ok_or_else(|| crate::error::AppError::internal("提交后未返回新建用户"))?;

        info!(provider = %login.provider, user_id = %user.id, "外部登录创建新账号");
        let token = self.jwt.generate_token(&user.id, &user.username)?;
        Ok(AuthenticationOutcome::signed_in(
            AuthenticationStatus::NewAccountCreated,
            token,
            UserDto::from(&user),
        ))
    }
}
