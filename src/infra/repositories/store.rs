//! Generic CRUD access shared by every marketplace table.
//!
//! All tables use an `i32` auto-increment primary key, so one store
//! parameterised by the SeaORM entity covers the pass-through operations.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
};

use crate::domain::Referencing;
use crate::errors::{AppError, AppResult};

/// Write payload that knows how to become a row of its table.
pub trait Draft: Referencing + Send + Sync + 'static {
    type Entity: EntityTrait;

    /// Build the row to write; `id` is `None` on insert.
    fn into_active_model(self, id: Option<i32>) -> <Self::Entity as EntityTrait>::ActiveModel;
}

/// CRUD operations over one table.
pub struct EntityStore<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> EntityStore<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Find row by primary key
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Find all rows
    pub async fn find_all(&self) -> AppResult<Vec<E::Model>> {
        Ok(E::find().all(&self.db).await?)
    }

    /// Find rows matching a condition
    pub async fn find_where(&self, condition: Condition) -> AppResult<Vec<E::Model>> {
        Ok(E::find().filter(condition).all(&self.db).await?)
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(E::find_by_id(id).count(&self.db).await? > 0)
    }

    pub async fn insert(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        Ok(model.update(&self.db).await?)
    }

    /// Hard delete by primary key; unknown ids are `NotFound`.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
