//! # 日程服务
//!
//! 日程的 DTO 定义与增删改查封装

use std::sync::Arc;

use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

use entity::appointments;

use super::base::{EntityDto, ServiceBase};
use super::validation::{max_len, required_str};
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 日程 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDto {
    #[serde(default)]
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    pub recurrence_rule: Option<String>,
    pub recurrence_id: Option<i32>,
    pub recurrence_exceptions: Option<String>,
}

impl Default for AppointmentDto {
    fn default() -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: 0,
            start: now,
            end: now,
            title: None,
            description: None,
            is_all_day: false,
            recurrence_rule: None,
            recurrence_id: None,
            recurrence_exceptions: None,
        }
    }
}

impl EntityDto<entity::Appointments> for AppointmentDto {
    fn from_model(model: &appointments::Model) -> Self {
        Self {
            id: model.id,
            start: model.start,
            end: model.end,
            title: Some(model.title.clone()),
            description: model.description.clone(),
            is_all_day: model.is_all_day,
            recurrence_rule: model.recurrence_rule.clone(),
            recurrence_id: model.recurrence_id,
            recurrence_exceptions: model.recurrence_exceptions.clone(),
        }
    }

    fn into_active_model(self) -> appointments::ActiveModel {
        let mut model = appointments::ActiveModel::default();
        self.apply_to(&mut model);
        model
    }

    fn apply_to(&self, model: &mut appointments::ActiveModel) {
        model.start = Set(self.start);
        model.end = Set(self.end);
        model.title = Set(self.title.clone().unwrap_or_default());
        model.description = Set(self.description.clone());
        model.is_all_day = Set(self.is_all_day);
        model.recurrence_rule = Set(self.recurrence_rule.clone());
        model.recurrence_id = Set(self.recurrence_id);
        model.recurrence_exceptions = Set(self.recurrence_exceptions.clone());
    }

    fn validate(&self) -> Result<()> {
        required_str(self.title.as_deref(), "title")?;
        max_len(self.title.as_deref(), 200, "title")?;
        max_len(self.recurrence_rule.as_deref(), 512, "recurrence_rule")?;
        Ok(())
    }
}

/// 日程服务
pub struct AppointmentService {
    base: ServiceBase<entity::Appointments>,
}

impl AppointmentService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            base: ServiceBase::new(uow, "appointment"),
        }
    }

    pub async fn get_appointment_dto_by_id(&self, id: i32) -> Result<Option<AppointmentDto>> {
        self.base.get_dto_by_id(id).await
    }

    pub async fn get_all_appointment_dtos(&self) -> Result<Vec<AppointmentDto>> {
        self.base.all_dto().await
    }

    /// 分页查询，按开始时间排序
    pub async fn list_appointments(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<AppointmentDto>, u64)> {
        let select = self
            .base
            .all()
            .order_by_asc(appointments::Column::Start);
        self.base.page_dto(select, page, limit).await
    }

    pub async fn create_appointment(&self, dto: AppointmentDto) -> Result<AppointmentDto> {
        self.base.insert_dto(dto).await
    }

    pub async fn update_appointment(&self, dto: AppointmentDto) -> Result<AppointmentDto> {
        self.base.update_dto(dto.id, dto).await
    }

    pub async fn delete_appointment(&self, id: i32) -> Result<()> {
        self.base.delete(id).await
    }
}
