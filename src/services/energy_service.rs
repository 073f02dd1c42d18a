//! Energy production and consumption records.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, Condition};

use super::catalog::Catalog;
use crate::domain::EnergyDraft;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::energy_record;

pub struct EnergyService {
    catalog: Catalog<EnergyDraft>,
}

impl EnergyService {
    pub fn new(catalog: Catalog<EnergyDraft>) -> Self {
        Self { catalog }
    }

    /// Plain CRUD over `produccionconsumoenergia`
    pub fn catalog(&self) -> &Catalog<EnergyDraft> {
        &self.catalog
    }

    pub async fn list_by_venture(&self, venture_id: i32) -> AppResult<Vec<energy_record::Model>> {
        self.catalog
            .store()
            .find_where(Condition::all().add(energy_record::Column::Idemprendimiento.eq(venture_id)))
            .await
    }

    /// Records dated within `[from, to]`, optionally for one venture.
    pub async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        venture_id: Option<i32>,
    ) -> AppResult<Vec<energy_record::Model>> {
        if from > to {
            return Err(AppError::bad_request("desde must not be after hasta"));
        }

        let mut condition = Condition::all().add(energy_record::Column::Fecha.between(from, to));
        if let Some(id) = venture_id {
            condition = condition.add(energy_record::Column::Idemprendimiento.eq(id));
        }

        self.catalog.store().find_where(condition).await
    }
}
