//! Error types for the CLI

use interpreter::InterpretError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Compilation or execution failed
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

impl CliError {
    /// Process exit status for this error, following the sysexits
    /// convention: 65 for bad input, 70 for a failed run, 74 for I/O.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Interpret(InterpretError::Compile(_)) => 65,
            CliError::Interpret(InterpretError::Runtime(_)) => 70,
            CliError::Interpret(InterpretError::Internal(_)) => 70,
            CliError::Interpret(InterpretError::Io(_)) => 74,
            CliError::Io(_) | CliError::Repl(_) => 74,
        }
    }

    /// Whether the VM already wrote this error to its error stream
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Interpret(InterpretError::Runtime(_)))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
