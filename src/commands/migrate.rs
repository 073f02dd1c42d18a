//! Migrate command - Schema migrations for the marketplace tables.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

fn failed(step: &str) -> impl FnOnce(DbErr) -> AppError + '_ {
    move |e| AppError::internal(format!("{step} failed: {e}"))
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(failed("Database connection"))?;

    match args.action {
        MigrateAction::Up => {
            db.migrate_up().await.map_err(failed("Migration"))?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_last().await.map_err(failed("Rollback"))?;
            tracing::info!("Rolled back the latest migration");
        }
        MigrateAction::Status => {
            let states = db
                .migration_states()
                .await
                .map_err(failed("Status query"))?;
            let pending = states.iter().filter(|s| !s.applied).count();
            for state in &states {
                println!("[{}] {}", if state.applied { "x" } else { " " }, state.name);
            }
            println!("{pending} pending of {}", states.len());
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table and re-running all migrations");
            db.reset().await.map_err(failed("Fresh migration"))?;
        }
    }

    Ok(())
}
