//! HTTP request handlers.

pub mod auth_handler;
pub mod catalog_handler;
pub mod energy_handler;
pub mod health_handler;
pub mod personal_data_handler;
pub mod statistics_handler;
pub mod user_handler;
pub mod venture_handler;

pub use auth_handler::auth_routes;
pub use energy_handler::energy_query_routes;
pub use personal_data_handler::personal_data_routes;
pub use statistics_handler::{dashboard_routes, history_query_routes};
pub use user_handler::user_routes;
pub use venture_handler::venture_routes;
