//! Repository wiring over a single connection pool.
//!
//! Services receive their repositories from here as trait objects so tests
//! can swap in the mockall doubles.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    ReferenceIndex, ReferenceLookup, StatisticsRepository, StatisticsStore, UserRepository,
    UserStore,
};

/// Concrete repositories sharing one connection pool.
pub struct Persistence {
    db: DatabaseConnection,
    users: Arc<UserStore>,
    references: Arc<ReferenceIndex>,
    statistics: Arc<StatisticsStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            references: Arc::new(ReferenceIndex::new(db.clone())),
            statistics: Arc::new(StatisticsStore::new(db.clone())),
            db,
        }
    }

    /// Get user repository
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    /// Get reference existence lookup
    pub fn references(&self) -> Arc<dyn ReferenceLookup> {
        self.references.clone()
    }

    /// Get statistics repository
    pub fn statistics(&self) -> Arc<dyn StatisticsRepository> {
        self.statistics.clone()
    }

    /// Connection for the generic entity stores
    pub fn connection(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
