//! Cross-table references checked before every write.

use std::fmt;

/// Table a foreign id points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    User,
    Region,
    UserType,
    DocumentType,
    Venture,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::User => "user",
            ReferenceKind::Region => "region",
            ReferenceKind::UserType => "user type",
            ReferenceKind::DocumentType => "document type",
            ReferenceKind::Venture => "venture",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A foreign id carried by a row about to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub id: i32,
}

impl Reference {
    pub fn new(kind: ReferenceKind, id: i32) -> Self {
        Self { kind, id }
    }
}

/// Rows that point at other rows.
///
/// References are listed in the order they must be checked.
pub trait Referencing {
    fn references(&self) -> Vec<Reference>;
}
