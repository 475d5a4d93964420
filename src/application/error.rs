//! Application-level errors (wraps domain and parse errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::parser::ParseError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid tree notation: {0}")]
    Parse(#[from] ParseError),

    #[error("tree depth {depth} exceeds the configured maximum of {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
