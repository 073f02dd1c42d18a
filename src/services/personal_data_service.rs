//! Personal data, one record per user.

use sea_orm::{ColumnTrait, Condition};

use super::catalog::Catalog;
use crate::domain::PersonalDataDraft;
use crate::errors::{AppResult, OptionExt};
use crate::infra::repositories::entities::personal_data;

pub struct PersonalDataService {
    catalog: Catalog<PersonalDataDraft>,
}

impl PersonalDataService {
    pub fn new(catalog: Catalog<PersonalDataDraft>) -> Self {
        Self { catalog }
    }

    /// Plain CRUD over `datospersonales`
    pub fn catalog(&self) -> &Catalog<PersonalDataDraft> {
        &self.catalog
    }

    /// Record of a user, if one was registered.
    pub async fn find_by_user(&self, user_id: i32) -> AppResult<Option<personal_data::Model>> {
        let mut rows = self
            .catalog
            .store()
            .find_where(Condition::all().add(personal_data::Column::Idusuarios.eq(user_id)))
            .await?;
        Ok(rows.pop())
    }

    pub async fn get_by_user(&self, user_id: i32) -> AppResult<personal_data::Model> {
        self.find_by_user(user_id).await?.ok_or_not_found()
    }
}
