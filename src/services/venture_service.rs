//! Venture listings beyond plain CRUD.

use std::sync::Arc;

use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryOrder};
use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::Catalog;
use crate::domain::VentureDraft;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::{user, venture};
use crate::infra::UserRepository;

/// Venture with its owner's account names, for the administrator overview.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = EmprendimientoConUsuario)]
pub struct VentureOverview {
    #[serde(flatten)]
    pub venture: venture::Model,
    pub username: Option<String>,
    pub email_user: Option<String>,
}

pub struct VentureService {
    catalog: Catalog<VentureDraft>,
    users: Arc<dyn UserRepository>,
}

impl VentureService {
    pub fn new(catalog: Catalog<VentureDraft>, users: Arc<dyn UserRepository>) -> Self {
        Self { catalog, users }
    }

    /// Plain CRUD over `emprendimiento`
    pub fn catalog(&self) -> &Catalog<VentureDraft> {
        &self.catalog
    }

    /// Ventures of one owner; unknown owners are `UserNotFound`.
    pub async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<venture::Model>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::UserNotFound);
        }
        self.catalog
            .store()
            .find_where(Condition::all().add(venture::Column::Idusuarios.eq(user_id)))
            .await
    }

    /// Every venture with its owner, ordered by id.
    pub async fn overview(&self) -> AppResult<Vec<VentureOverview>> {
        let rows = venture::Entity::find()
            .find_also_related(user::Entity)
            .order_by_asc(venture::Column::Idemprendimiento)
            .all(self.catalog.store().db())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(venture, owner)| VentureOverview {
                venture,
                username: owner.as_ref().map(|u| u.username.clone()),
                email_user: owner.map(|u| u.email_user),
            })
            .collect())
    }
}
