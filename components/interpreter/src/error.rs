//! Outcome types for a VM run

use core_types::{CompileError, RuntimeError};
use thiserror::Error;

/// Why a run did not complete.
///
/// `Compile` and `Runtime` are the two user-facing outcomes. `Internal`
/// means the chunk was malformed in a way a correct compiler never
/// produces, and `Io` means an output stream failed.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The compiler rejected the source; nothing ran
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// An operator received an operand of the wrong kind
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// The chunk violated an encoding invariant
    #[error("internal error: {0}")]
    Internal(String),

    /// Writing program output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterpretError {
    /// Check if this is a compile error
    pub fn is_compile(&self) -> bool {
        matches!(self, InterpretError::Compile(_))
    }

    /// Check if this is a runtime error
    pub fn is_runtime(&self) -> bool {
        matches!(self, InterpretError::Runtime(_))
    }

    /// Get the runtime error, if this is one
    pub fn as_runtime(&self) -> Option<&RuntimeError> {
        match self {
            InterpretError::Runtime(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for VM operations
pub type InterpretResult<T> = Result<T, InterpretError>;
