//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Parse(_) | ApplicationError::TooDeep { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::InputNotFound(_) => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;

    #[test]
    fn given_parse_error_when_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::from(ParseError::EmptyToken { position: 0 }));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_invalid_args_when_exit_code_then_usage() {
        assert_eq!(
            CliError::InvalidArgs("depth".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
