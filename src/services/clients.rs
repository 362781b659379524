//! # 客户服务
//!
//! 客户档案的 DTO 定义与增删改查封装

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use entity::clients;

use super::base::{EntityDto, ServiceBase};
use super::validation::{max_len, required_str};
use crate::error::Result;
use crate::persistence::UnitOfWork;

/// 客户 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDto {
    #[serde(default)]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub employer: Option<String>,
    pub referred_by: Option<String>,
    pub notes: Option<String>,
}

impl ClientDto {
    /// 列表展示用的 "姓, 名; Phone: 电话" 格式
    #[must_use]
    pub fn full_name_and_phone(&self) -> String {
        format!(
            "{}, {}; Phone: {}",
            self.last_name.as_deref().unwrap_or_default(),
            self.first_name.as_deref().unwrap_or_default(),
            self.phone_number.as_deref().unwrap_or_default()
        )
    }
}

impl EntityDto<entity::Clients> for ClientDto {
    fn from_model(model: &clients::Model) -> Self {
        Self {
            id: model.id,
            first_name: Some(model.first_name.clone()),
            last_name: Some(model.last_name.clone()),
            phone_number: Some(model.phone_number.clone()),
            email: model.email.clone(),
            street: model.street.clone(),
            city: model.city.clone(),
            state: model.state.clone(),
            zip_code: model.zip_code.clone(),
            country: model.country.clone(),
            birthdate: model.birthdate,
            occupation: model.occupation.clone(),
            employer: model.employer.clone(),
            referred_by: model.referred_by.clone(),
            notes: model.notes.clone(),
        }
    }

    fn into_active_model(self) -> clients::ActiveModel {
        let mut model = clients::ActiveModel::default();
        self.apply_to(&mut model);
        model
    }

    fn apply_to(&self, model: &mut clients::ActiveModel) {
        model.first_name = Set(self.first_name.clone().unwrap_or_default());
        model.last_name = Set(self.last_name.clone().unwrap_or_default());
        model.phone_number = Set(self.phone_number.clone().unwrap_or_default());
        model.email = Set(self.email.clone());
        model.street = Set(self.street.clone());
        model.city = Set(self.city.clone());
        model.state = Set(self.state.clone());
        model.zip_code = Set(self.zip_code.clone());
        model.country = Set(self.country.clone());
        model.birthdate = Set(self.birthdate);
        model.occupation = Set(self.occupation.clone());
        model.employer = Set(self.employer.clone());
        model.referred_by = Set(self.referred_by.clone());
        model.notes = Set(self.notes.clone());
    }

    fn validate(&self) -> Result<()> {
        required_str(self.first_name.as_deref(), "first_name")?;
        required_str(self.last_name.as_deref(), "last_name")?;
        required_str(self.phone_number.as_deref(), "phone_number")?;
        max_len(self.first_name.as_deref(), 100, "first_name")?;
        max_len(self.last_name.as_deref(), 100, "last_name")?;
        max_len(self.phone_number.as_deref(), 15, "phone_number")?;
        max_len(self.email.as_deref(), 256, "email")?;
        max_len(self.street.as_deref(), 100, "street")?;
        max_len(self.city.as_deref(), 50, "city")?;
        max_len(self.state.as_deref(), 2, "state")?;
        max_len(self.zip_code.as_deref(), 10, "zip_code")?;
        max_len(self.country.as_deref(), 50, "country")?;
        max_len(self.occupation.as_deref(), 50, "occupation")?;
        max_len(self.employer.as_deref(), 100, "employer")?;
        max_len(self.referred_by.as_deref(), 100, "referred_by")?;
        Ok(())
    }
}

/// 客户服务
pub struct ClientService {
    base: ServiceBase<entity::Clients>,
}

impl ClientService {
    #[must_use]
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            base: ServiceBase::new(uow, "client"),
        }
    }

    pub async fn get_client_dto_by_id(&self, id: i32) -> Result<Option<ClientDto>> {
        self.base.get_dto_by_id(id).await
    }

    pub async fn get_all_client_dtos(&self) -> Result<Vec<ClientDto>> {
        self.base.all_dto().await
    }

    /// 分页查询，`search` 对姓氏做模糊匹配
    pub async fn list_clients(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<(Vec<ClientDto>, u64)> {
        let mut select = self.base.all().order_by_asc(clients::Column::Id);
        if let Some(term) = search {
            select = select.filter(clients::Column::LastName.contains(term));
        }
        self.base.page_dto(select, page, limit).await
    }

    pub async fn create_client(&self, dto: ClientDto) -> Result<ClientDto> {
        self.base.insert_dto(dto).await
    }

    pub async fn update_client(&self, dto: ClientDto) -> Result<ClientDto> {
        self.base.update_dto(dto.id, dto).await
    }

    pub async fn delete_client(&self, id: i32) -> Result<()> {
        self.base.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::testing::{seed_agent, test_db, uow_as};

    fn sample_dto() -> ClientDto {
        ClientDto {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            phone_number: Some("1234567890".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_name_and_phone_format() {
        assert_eq!(
            sample_dto().full_name_and_phone(),
            "Doe, John; Phone: 1234567890"
        );
    }

    #[test]
    fn test_validate_rejects_missing_phone() {
        let dto = ClientDto {
            phone_number: None,
            ..sample_dto()
        };
        let err = dto.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_then_fetch_client() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = ClientService::new(uow_as(&conn, &agent));

        let created = service.create_client(sample_dto()).await.expect("create");
        assert!(created.id > 0);

        let fetched = service
            .get_client_dto_by_id(created.id)
            .await
            .expect("query")
            .expect("client exists");
        assert_eq!(fetched.first_name.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn test_update_missing_client_is_not_found() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = ClientService::new(uow_as(&conn, &agent));

        let dto = ClientDto {
            id: 4242,
            ..sample_dto()
        };
        let err = service.update_client(dto).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_clients_search_filters_by_last_name() {
        let conn = test_db().await;
        let agent = seed_agent(&conn, "agent-1").await;
        let service = ClientService::new(uow_as(&conn, &agent));

        service.create_client(sample_dto()).await.expect("create");
        service
            .create_client(ClientDto {
                first_name: Some("Jane".to_string()),
                last_name: Some("Smith".to_string()),
                phone_number: Some("5550001111".to_string()),
                ..Default::default()
            })
            .await
            .expect("create");

        let (rows, total) = service
            .list_clients(1, 20, Some("Smi"))
            .await
            .expect("list");
        assert_eq!(total, 1);
        assert_eq!(rows[0].last_name.as_deref(), Some("Smith"));
    }
}
