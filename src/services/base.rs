//! # 通用服务基类
//!
//! 在仓储之上提供实体与 DTO 两组操作；所有变更操作自动提交工作单元

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, Select};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::persistence::{AuditedEntity, UnitOfWork};

/// 实体与 DTO 之间的映射约定
///
/// 每个 DTO 类型针对其实体实现一次，服务基类据此提供通用的 DTO 操作
pub trait EntityDto<E: AuditedEntity>: Sized + Send + Sync
where
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    /// 从实体模型构造 DTO
    fn from_model(model: &E::Model) -> Self;

    /// 转换为用于插入的 ActiveModel（主键与审计列留空）
    fn into_active_model(self) -> E::Active;

    /// 将 DTO 的可编辑字段写入既有实体的 ActiveModel
    fn apply_to(&self, model: &mut E::Active);

    /// 持久化前校验；默认无校验
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// 通用服务基类
pub struct ServiceBase<E> {
    uow: Arc<UnitOfWork>,
    name: &'static str,
    _entity: PhantomData<E>,
}

impl<E> ServiceBase<E>
where
    E: AuditedEntity,
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    /// `name` 用于日志与错误信息中的资源名称
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>, name: &'static str) -> Self {
        Self {
            uow,
            name,
            _entity: PhantomData,
        }
    }

    /// 所属工作单元
    #[must_use]
    pub const fn unit_of_work(&self) -> &Arc<UnitOfWork> {
        &self.uow
    }

    /// 按主键查询实体
    pub async fn get_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>> {
        self.uow.repository::<E>().get_by_id(id).await
    }

    /// 未物化的实体查询
    #[must_use]
    pub fn all(&self) -> Select<E> {
        self.uow.repository::<E>().all()
    }

    /// 插入实体并提交，返回落库后的模型
    pub async fn insert(&self, model: E::Active) -> Result<E::Model> {
        debug!(entity = self.name, "插入实体");
        let repository = self.uow.repository::<E>();
        repository.insert(model);
        self.uow.commit().await?;
        repository
            .take_flushed()
            .pop()
            .ok_or_else(|| AppError::internal(format!("{} 提交后未返回插入结果", self.name)))
    }

    /// 更新实体并提交，返回落库后的模型
    pub async fn update(&self, model: E::Active) -> Result<E::Model> {
        debug!(entity = self.name, "更新实体");
        let repository = self.uow.repository::<E>();
        repository.update(model);
        self.uow.commit().await?;
        repository
            .take_flushed()
            .pop()
            .ok_or_else(|| AppError::internal(format!("{} 提交后未返回更新结果", self.name)))
    }

    /// 按主键删除实体并提交；目标不存在时为静默无操作
    pub async fn delete(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<()> {
        debug!(entity = self.name, id = ?id, "删除实体");
        self.uow.repository::<E>().delete(id);
        self.uow.commit().await
    }

    /// 按主键查询并映射为 DTO
    pub async fn get_dto_by_id<D: EntityDto<E>>(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<D>> {
        Ok(self.get_by_id(id).await?.as_ref().map(D::from_model))
    }

    /// 查询全部实体并映射为 DTO
    pub async fn all_dto<D: EntityDto<E>>(&self) -> Result<Vec<D>> {
        let models = self.all().all(self.uow.connection()).await?;
        Ok(models.iter().map(D::from_model).collect())
    }

    /// 对给定查询执行分页并映射为 DTO，返回 (当前页, 总条数)
    pub async fn page_dto<D: EntityDto<E>>(
        &self,
        select: Select<E>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<D>, u64)> {
        let paginator = select.paginate(self.uow.connection(), limit);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((models.iter().map(D::from_model).collect(), total))
    }

    /// 校验、插入并提交 DTO，返回落库后的 DTO
    pub async fn insert_dto<D: EntityDto<E>>(&self, dto: D) -> Result<D> {
        dto.validate()?;
        let inserted = self.insert(dto.into_active_model()).await?;
        Ok(D::from_model(&inserted))
    }

    /// 校验并更新既有实体；`id` 不存在时返回未找到错误
    pub async fn update_dto<D: EntityDto<E>>(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
        dto: D,
    ) -> Result<D> {
        dto.validate()?;
        let existing = self
            .get_by_id(id.clone())
            .await?
            .ok_or_else(|| AppError::not_found(self.name, format!("{id:?}")))?;
        let mut model = existing.into_active_model();
        dto.apply_to(&mut model);
        let updated = self.update(model).await?;
        Ok(D::from_model(&updated))
    }
}
