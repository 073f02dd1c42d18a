//! Seed command - Inserts the rows every deployment needs.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    seed::run(db.connection(), &config.admin).await?;
    tracing::info!("Seed data in place");
    Ok(())
}
