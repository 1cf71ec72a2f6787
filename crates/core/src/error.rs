//! Errors raised while building catalog records.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A catalog value that cannot be turned into a typed record.
///
/// Grouping itself never fails; these only come out of constructors and
/// parsers at the edges (ids, `id=name` pairs).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{kind} must not be blank")]
    BlankId { kind: &'static str },

    #[error("invalid {field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}

impl DomainError {
    pub fn blank_id(kind: &'static str) -> Self {
        Self::BlankId { kind }
    }

    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            reason: reason.into(),
        }
    }
}
