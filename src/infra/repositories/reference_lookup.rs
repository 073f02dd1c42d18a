//! Existence checks for foreign ids.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use super::entities::{document_type, region, user, user_type, venture};
use crate::domain::{Reference, ReferenceKind};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Answers whether the row a reference points at exists.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    async fn exists(&self, reference: Reference) -> AppResult<bool>;
}

/// ReferenceLookup backed by the primary keys of the referenced tables.
pub struct ReferenceIndex {
    db: DatabaseConnection,
}

impl ReferenceIndex {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceLookup for ReferenceIndex {
    async fn exists(&self, reference: Reference) -> AppResult<bool> {
        let id = reference.id;
        let count = match reference.kind {
            ReferenceKind::User => user::Entity::find_by_id(id).count(&self.db).await?,
            ReferenceKind::Region => region::Entity::find_by_id(id).count(&self.db).await?,
            ReferenceKind::UserType => user_type::Entity::find_by_id(id).count(&self.db).await?,
            ReferenceKind::DocumentType => {
                document_type::Entity::find_by_id(id).count(&self.db).await?
            }
            ReferenceKind::Venture => venture::Entity::find_by_id(id).count(&self.db).await?,
        };
        Ok(count > 0)
    }
}
