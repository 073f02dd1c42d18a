//! Red Comunitaria - community marketplace backend
//!
//! Ventures, their owners' accounts and personal data, energy records,
//! comments and the statistics behind the dashboard.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, credential rules and aggregate arithmetic
//! - **services**: Application use cases
//! - **infra**: Database, migrations, entities and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared wire types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (runs migrations and the seed first)
//! cargo run -- serve
//!
//! # Inspect migrations
//! cargo run -- migrate status
//!
//! # Insert roles and the administrator account
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Principal, User};
pub use errors::{AppError, AppResult};
