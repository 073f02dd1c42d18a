//! Referential checks run before inserts and updates.
//!
//! The schema declares no foreign keys, so every write verifies the ids it
//! carries here and reports the first one that does not resolve.

use crate::domain::Reference;
use crate::errors::{AppError, AppResult};
use crate::infra::ReferenceLookup;

/// Fail with `ReferenceNotFound` for the first reference with no row.
pub async fn ensure_references(
    lookup: &dyn ReferenceLookup,
    references: &[Reference],
) -> AppResult<()> {
    for reference in references {
        if !lookup.exists(*reference).await? {
            tracing::warn!(
                kind = %reference.kind,
                id = reference.id,
                "Rejected write referencing a missing row"
            );
            return Err(AppError::missing_reference(reference.kind, reference.id));
        }
    }
    Ok(())
}
