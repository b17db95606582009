//! Argument-validation errors and their exit-code mapping

use thiserror::Error;

use crate::exitcode;

/// Errors raised by [`ActionArgs::validate`](crate::cli::params::ActionArgs::validate).
///
/// Both are terminal for the invocation: the caller reports the message and
/// exits, no retry is possible without new input.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("not enough arguments for action {action}: expected minimum {expected} but got {actual}")]
    InsufficientArguments {
        action: String,
        expected: usize,
        actual: usize,
    },

    #[error("too many arguments for action {action}: limit is {limit} but saw {actual}: {arguments}")]
    TooManyArguments {
        action: String,
        limit: usize,
        actual: usize,
        /// Every positional argument, quoted and space-separated
        arguments: String,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, ArgsError>;

impl ArgsError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::InsufficientArguments { .. } | ArgsError::TooManyArguments { .. } => {
                exitcode::USAGE
            }
        }
    }
}
