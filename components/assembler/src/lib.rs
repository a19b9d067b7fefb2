//! Orion Assembler Component
//!
//! Turns line-oriented assembly text into a bytecode [`Chunk`], so the VM
//! can be driven from source without a full language front end.
//!
//! # Overview
//!
//! - [`lexer`] - Splits source into instruction lines and classifies literals
//! - [`Assembler`] - Encodes instruction lines into a chunk; implements
//!   [`Compiler`](bytecode_system::Compiler)
//!
//! # Syntax
//!
//! One instruction per line. `;` starts a comment. Mnemonics are the opcode
//! names and are case-insensitive. `CONSTANT` takes one literal operand: a
//! decimal number, `nil`, `true` or `false`.
//!
//! # Example
//!
//! ```
//! use assembler::Assembler;
//! use bytecode_system::Compiler;
//!
//! let source = "CONSTANT 3\nCONSTANT 4 ; second operand\nADD\nRET\n";
//! let chunk = Assembler::new().compile(source).unwrap();
//!
//! assert_eq!(chunk.len(), 6);
//! assert_eq!(chunk.constant_count(), 2);
//! assert_eq!(chunk.lines, vec![1, 1, 2, 2, 3, 4]);
//! ```
//!
//! [`Chunk`]: bytecode_system::Chunk

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod error;
pub mod lexer;

pub use assembler::Assembler;
pub use lexer::{Literal, SourceLine};
