//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub mod entities;
mod reference_lookup;
mod statistics_repository;
pub mod store;
mod user_repository;

pub use reference_lookup::{ReferenceIndex, ReferenceLookup};
pub use statistics_repository::{StatisticsRepository, StatisticsStore};
pub use store::{Draft, EntityStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use reference_lookup::MockReferenceLookup;
#[cfg(any(test, feature = "test-utils"))]
pub use statistics_repository::MockStatisticsRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
