//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::Services;

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    /// Database connection, for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build every service over the database connection.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Arc::new(Services::from_connection(database.get_connection(), config));
        Self { services, database }
    }
}
