//! Domain layer - Core business entities and logic
//!
//! Entities, value objects and the pure rules that do not need a database:
//! credential checks, reference declarations and aggregate arithmetic.

pub mod catalog;
pub mod credential;
pub mod password;
pub mod reference;
pub mod statistics;
pub mod user;

pub use catalog::{
    CommentDraft, DocumentTypeDraft, EnergyDraft, HistoryDraft, PersonalDataDraft, RegionDraft,
    RoleDraft, UserTypeDraft, VentureDraft,
};
pub use credential::CredentialVerifier;
pub use password::Password;
pub use reference::{Reference, ReferenceKind, Referencing};
pub use statistics::{CountryTotal, EnergySummary, RegionCount, RegionShare, TypeChart};
pub use user::{AuthResponse, CreateUser, NewUser, Principal, User};
