//! Bytecode system for the Orion VM
//!
//! This crate provides the instruction set, the bytecode container the
//! interpreter reads, a disassembler for diagnostics, and the `Compiler`
//! seam that turns source text into a container.
//!
//! # Features
//!
//! - Stack-based, byte-encoded instruction set
//! - Constant pool addressed by a one-byte operand
//! - Per-byte source line table for error reporting
//! - Human-readable disassembly
//!
//! # Example
//!
//! ```
//! use bytecode_system::{disassemble_chunk, Chunk, Opcode, Value};
//!
//! let mut chunk = Chunk::new();
//!
//! // Load two constants and add them
//! chunk.emit_constant(Value::Number(3.0), 1).unwrap();
//! chunk.emit_constant(Value::Number(4.0), 1).unwrap();
//! chunk.write_opcode(Opcode::Add, 1);
//! chunk.write_opcode(Opcode::Return, 1);
//!
//! assert_eq!(chunk.len(), 6);
//! assert!(disassemble_chunk(&chunk, "sum").contains("ADD"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod compiler;
pub mod debug;
pub mod opcode;

// Re-export main types at crate root
pub use chunk::{Chunk, ChunkError, MAX_CONSTANTS};
pub use compiler::Compiler;
pub use core_types::{CompileError, Value};
pub use debug::{disassemble_chunk, disassemble_instruction};
pub use opcode::Opcode;
