//! # 工作单元
//!
//! 按请求聚合仓储操作，在单个事务中提交全部暂存变更

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sea_orm::{DatabaseConnection, IntoActiveModel, PrimaryKeyTrait, TransactionTrait};
use tracing::{debug, error};

use super::audit::{AuditStamp, AuditedEntity, CurrentUser};
use super::repository::{EntityFlush, Repository};
use crate::error::Result;

/// 工作单元
///
/// 每个逻辑请求对应一个实例；同一实体类型的仓储在生命周期内只创建一次
pub struct UnitOfWork {
    conn: DatabaseConnection,
    current_user: Arc<dyn CurrentUser>,
    repositories: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    flush_order: Mutex<Vec<Arc<dyn EntityFlush>>>,
}

impl UnitOfWork {
    #[must_use]
    pub fn new(conn: DatabaseConnection, current_user: Arc<dyn CurrentUser>) -> Self {
        Self {
            conn,
            current_user,
            repositories: Mutex::new(HashMap::new()),
            flush_order: Mutex::new(Vec::new()),
        }
    }

    /// 底层数据库连接，供只读查询直接使用
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// 获取指定实体类型的仓储；同一类型在本工作单元内返回同一实例
    pub fn repository<E>(&self) -> Arc<Repository<E>>
    where
        E: AuditedEntity,
        E::Model: IntoActiveModel<E::Active> + Send + Sync + 'static,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType:
            Clone + std::fmt::Debug + Send + 'static,
    {
        let mut repositories = self
            .repositories
            .lock()
            .expect("repository cache mutex poisoned");

        if let Some(existing) = repositories.get(&TypeId::of::<E>()) {
            return Arc::clone(existing)
                .downcast::<Repository<E>>()
                .expect("repository cache keyed by entity type");
        }

        let repository = Arc::new(Repository::<E>::new(self.conn.clone()));
        repositories.insert(
            TypeId::of::<E>(),
            Arc::clone(&repository) as Arc<dyn Any + Send + Sync>,
        );
        self.flush_order
            .lock()
            .expect("flush order mutex poisoned")
            .push(Arc::clone(&repository) as Arc<dyn EntityFlush>);

        repository
    }

    /// 在单个事务中提交全部暂存变更
    ///
    /// 提交前为新增/修改的实体写入审计信息；失败时记录日志并原样上抛
    pub async fn commit(&self) -> Result<()> {
        let stamp = AuditStamp::capture(self.current_user.as_ref());

        let flushables: Vec<Arc<dyn EntityFlush>> = self
            .flush_order
            .lock()
            .expect("flush order mutex poisoned")
            .clone();

        let outcome: Result<()> = async {
            let txn = self.conn.begin().await?;
            for flushable in &flushables {
                flushable.flush(&txn, &stamp).await?;
            }
            txn.commit().await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                debug!("工作单元提交完成");
                Ok(())
            }
            Err(err) => {
                error!("工作单元提交失败: {err}");
                Err(err)
            }
        }
    }
}
