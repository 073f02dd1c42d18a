//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. Account logic depends on repository traits;
//! table-backed resources share the generic `Catalog`.

mod auth_service;
pub mod catalog;
pub mod container;
mod energy_service;
pub mod integrity;
mod personal_data_service;
mod statistics_service;
pub mod token;
mod user_service;
mod venture_service;

pub use container::Services;

pub use auth_service::{AuthService, Authenticator, Registration};
pub use catalog::{Catalog, ModelOf};
pub use energy_service::EnergyService;
pub use personal_data_service::PersonalDataService;
pub use statistics_service::StatisticsService;
pub use token::{Claims, TokenService};
pub use user_service::{UserManager, UserService};
pub use venture_service::{VentureOverview, VentureService};
