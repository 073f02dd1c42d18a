//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and seed data
//! - SeaORM entities and repositories

pub mod db;
pub mod persistence;
pub mod repositories;

pub use db::{Database, Migrator};
pub use persistence::Persistence;
pub use repositories::{
    Draft, EntityStore, ReferenceIndex, ReferenceLookup, StatisticsRepository, StatisticsStore,
    UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockReferenceLookup, MockStatisticsRepository, MockUserRepository};
