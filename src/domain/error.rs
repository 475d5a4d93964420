//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated rendering invariants.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("column table has {expected} slots but {actual} values were supplied")]
    SlotMismatch { expected: usize, actual: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
