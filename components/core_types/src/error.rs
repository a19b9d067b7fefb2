//! Error types for compilation and execution.
//!
//! Two fault categories exist: compile-time faults, which are reported by a
//! compiler collaborator before the VM runs, and runtime faults, which the
//! dispatch loop raises when an operator receives an operand of the wrong
//! kind.

use thiserror::Error;

/// The kind of runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operator received an operand of the wrong kind
    TypeError,
}

/// A runtime fault with message and originating source line.
///
/// The `Display` form is the same two-line diagnostic the VM writes to its
/// error stream.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, RuntimeError};
///
/// let error = RuntimeError::new(ErrorKind::TypeError, "Operand must be a number.", 4);
///
/// assert_eq!(error.message, "Operand must be a number.");
/// assert_eq!(error.to_string(), "Operand must be a number.\n[line 4] in script");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}\n[line {line}] in script")]
pub struct RuntimeError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source line of the instruction that failed
    pub line: u32,
}

impl RuntimeError {
    /// Create a new runtime error
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }
}

/// A fault reported by a compiler before any bytecode runs.
///
/// # Examples
///
/// ```
/// use core_types::CompileError;
///
/// let error = CompileError::new("Unknown instruction 'PUSH'.", 2);
/// assert_eq!(error.to_string(), "[line 2] Error: Unknown instruction 'PUSH'.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {message}")]
pub struct CompileError {
    /// Human-readable error message
    pub message: String,
    /// Source line where compilation failed
    pub line: u32,
}

impl CompileError {
    /// Create a new compile error
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}
