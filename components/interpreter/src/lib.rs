//! Bytecode interpreter for the Orion VM
//!
//! This crate provides the execution core:
//! - A dynamically growing operand stack
//! - The fetch-decode-execute dispatch loop
//! - Runtime error reporting with source lines
//! - An optional instruction trace for debugging
//!
//! # Example
//!
//! ```
//! use interpreter::{VmConfig, VM};
//! use bytecode_system::{Chunk, Opcode, Value};
//!
//! let mut vm: VM<Vec<u8>, Vec<u8>> = VM::with_streams(VmConfig::default(), Vec::new(), Vec::new());
//! let mut chunk = Chunk::new();
//!
//! chunk.emit_constant(Value::Number(3.0), 1).unwrap();
//! chunk.emit_constant(Value::Number(4.0), 1).unwrap();
//! chunk.write_opcode(Opcode::Add, 1);
//! chunk.write_opcode(Opcode::Return, 1);
//!
//! let result = vm.execute(&chunk).unwrap();
//! assert_eq!(result, Value::Number(7.0));
//! assert_eq!(String::from_utf8_lossy(vm.output()), "7.000000\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod report;
pub mod stack;
pub mod trace;
pub mod vm;

// Re-export main types at crate root
pub use config::VmConfig;
pub use context::ExecutionContext;
pub use dispatch::Dispatcher;
pub use error::{InterpretError, InterpretResult};
pub use stack::{Stack, DEFAULT_STACK_CAPACITY};
pub use vm::VM;
