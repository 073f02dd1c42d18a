//! SeaORM entity definitions
//!
//! One module per table. Field names follow the column names clients
//! already use, so rows serialize without renaming.

pub mod comment;
pub mod document_type;
pub mod energy_record;
pub mod personal_data;
pub mod region;
pub mod role;
pub mod user;
pub mod user_type;
pub mod venture;
pub mod venture_history;
