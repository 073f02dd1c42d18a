//! CRUD service shared by every table-backed resource.
//!
//! Writes check the draft's references first; reads are plain pass-throughs.

use std::sync::Arc;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use super::integrity::ensure_references;
use crate::domain::Referencing;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Draft, EntityStore, ReferenceLookup};

pub type ModelOf<D> = <<D as Draft>::Entity as EntityTrait>::Model;

/// List, fetch, create, update and delete for one resource.
pub struct Catalog<D: Draft> {
    store: EntityStore<D::Entity>,
    references: Arc<dyn ReferenceLookup>,
}

impl<D> Catalog<D>
where
    D: Draft,
    ModelOf<D>: IntoActiveModel<<D::Entity as EntityTrait>::ActiveModel> + Send + Sync + 'static,
    <D::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = D::Entity> + ActiveModelBehavior + Send + 'static,
    <<D::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: DatabaseConnection, references: Arc<dyn ReferenceLookup>) -> Self {
        Self {
            store: EntityStore::new(db),
            references,
        }
    }

    /// Underlying store, for resource-specific queries
    pub fn store(&self) -> &EntityStore<D::Entity> {
        &self.store
    }

    pub async fn list_all(&self) -> AppResult<Vec<ModelOf<D>>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ModelOf<D>> {
        self.store.find_by_id(id).await?.ok_or_not_found()
    }

    pub async fn create(&self, draft: D) -> AppResult<ModelOf<D>> {
        ensure_references(self.references.as_ref(), &draft.references()).await?;
        self.store.insert(draft.into_active_model(None)).await
    }

    /// Replace the row `id`; unknown ids are `NotFound` before any other check.
    pub async fn update(&self, id: i32, draft: D) -> AppResult<ModelOf<D>> {
        if !self.store.exists(id).await? {
            return Err(AppError::NotFound);
        }
        ensure_references(self.references.as_ref(), &draft.references()).await?;
        self.store.update(draft.into_active_model(Some(id))).await
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.store.delete_by_id(id).await
    }
}
