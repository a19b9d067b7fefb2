//! Core runtime value types and error handling for the Orion VM.
//!
//! This crate provides the foundational types shared by every other
//! component: the tagged runtime value and the error types that describe
//! compile-time and run-time failures.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values (nil, bool, number)
//! - [`RuntimeError`] - A runtime fault with message and source line
//! - [`ErrorKind`] - Category of a runtime fault
//! - [`CompileError`] - A fault reported by a compiler collaborator
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, RuntimeError, Value};
//!
//! let num = Value::number(0.0);
//! assert!(!num.is_falsey());
//! assert_eq!(num.to_string(), "0.000000");
//!
//! let error = RuntimeError::new(ErrorKind::TypeError, "Operands must be numbers.", 3);
//! assert_eq!(error.line, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{CompileError, ErrorKind, RuntimeError};
pub use value::Value;
