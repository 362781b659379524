//! # 通用仓储
//!
//! 按实体类型提供 CRUD 暂存操作；所有写操作都推迟到工作单元提交时执行

use std::sync::Mutex;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, Select,
};

use super::audit::{AuditStamp, Audited, AuditedEntity};
use crate::error::Result;

/// 等待提交的写操作
pub(crate) enum PendingOp<E: AuditedEntity>
where
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    Insert(E::Active),
    Update(E::Active),
    Delete(<E::PrimaryKey as PrimaryKeyTrait>::ValueType),
}

/// 单一实体类型的仓储
///
/// 读操作直接走连接执行；写操作仅记录到暂存队列，
/// 由所属工作单元在一个事务中统一落库
pub struct Repository<E: AuditedEntity>
where
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    conn: DatabaseConnection,
    pending: Mutex<Vec<PendingOp<E>>>,
    flushed: Mutex<Vec<E::Model>>,
}

impl<E> Repository<E>
where
    E: AuditedEntity,
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    pub(crate) fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            pending: Mutex::new(Vec::new()),
            flushed: Mutex::new(Vec::new()),
        }
    }

    /// 按主键查询，不存在时返回 None
    pub async fn get_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.conn).await?)
    }

    /// 返回未物化的查询，调用方可继续追加过滤和关联加载
    #[must_use]
    pub fn all(&self) -> Select<E> {
        E::find()
    }

    /// 暂存一条新增
    pub fn insert(&self, model: E::Active) {
        self.pending_ops().push(PendingOp::Insert(model));
    }

    /// 暂存一条修改；`model` 必须带主键
    pub fn update(&self, model: E::Active) {
        self.pending_ops().push(PendingOp::Update(model));
    }

    /// 暂存一条删除；目标行不存在时提交为静默无操作
    pub fn delete(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) {
        self.pending_ops().push(PendingOp::Delete(id));
    }

    /// 取出自上次提交以来落库的实体（按执行顺序）
    pub(crate) fn take_flushed(&self) -> Vec<E::Model> {
        std::mem::take(&mut *self.flushed.lock().expect("flushed mutex poisoned"))
    }

    fn pending_ops(&self) -> std::sync::MutexGuard<'_, Vec<PendingOp<E>>> {
        self.pending.lock().expect("pending ops mutex poisoned")
    }
}

/// 工作单元提交时对单个仓储执行落库的对象安全接口
#[async_trait::async_trait]
pub(crate) trait EntityFlush: Send + Sync {
    async fn flush(&self, txn: &DatabaseTransaction, stamp: &AuditStamp) -> Result<()>;
}

#[async_trait::async_trait]
impl<E> EntityFlush for Repository<E>
where
    E: AuditedEntity,
    E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + std::fmt::Debug + Send + 'static,
{
    async fn flush(&self, txn: &DatabaseTransaction, stamp: &AuditStamp) -> Result<()> {
        let ops: Vec<PendingOp<E>> = {
            let mut pending = self.pending_ops();
            pending.drain(..).collect()
        };

        for op in ops {
            match op {
                PendingOp::Insert(mut model) => {
                    model.stamp_created(stamp);
                    let inserted = model.insert(txn).await?;
                    self.flushed
                        .lock()
                        .expect("flushed mutex poisoned")
                        .push(inserted);
                }
                PendingOp::Update(mut model) => {
                    model.stamp_modified(stamp);
                    let updated = model.update(txn).await?;
                    self.flushed
                        .lock()
                        .expect("flushed mutex poisoned")
                        .push(updated);
                }
                PendingOp::Delete(id) => {
                    // 零行受影响即为静默无操作
                    E::delete_by_id(id).exec(txn).await?;
                }
            }
        }

        Ok(())
    }
}
