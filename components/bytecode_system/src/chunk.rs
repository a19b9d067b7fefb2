//! Bytecode chunk - compiled bytecode container
//!
//! Contains the instruction bytes, the constant pool, and the line table
//! used for error reporting.

use thiserror::Error;

use crate::opcode::Opcode;
use core_types::Value;

/// Maximum number of constants addressable by a one-byte operand
pub const MAX_CONSTANTS: usize = u8::MAX as usize + 1;

/// Errors raised while building a chunk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The constant pool already holds [`MAX_CONSTANTS`] entries
    #[error("Too many constants in one chunk.")]
    TooManyConstants,
}

/// A compiled bytecode chunk.
///
/// `code` and `lines` always have the same length: `lines[i]` is the source
/// line that produced `code[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    /// Instruction bytes (opcodes and inline operands)
    pub code: Vec<u8>,
    /// Constant pool for literal values
    pub constants: Vec<Value>,
    /// Source line of each byte in `code`
    pub lines: Vec<u32>,
}

impl Chunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw byte produced by the given source line
    pub fn write(&mut self, byte: u8, line: u32) {
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Append an opcode produced by the given source line
    pub fn write_opcode(&mut self, opcode: Opcode, line: u32) {
        self.write(opcode.into(), line);
    }

    /// Add a constant to the constant pool and return its index
    pub fn add_constant(&mut self, value: Value) -> Result<u8, ChunkError> {
        if self.constants.len() >= MAX_CONSTANTS {
            return Err(ChunkError::TooManyConstants);
        }
        self.constants.push(value);
        Ok((self.constants.len() - 1) as u8)
    }

    /// Add a constant and emit the `Constant` instruction that loads it
    pub fn emit_constant(&mut self, value: Value, line: u32) -> Result<u8, ChunkError> {
        let idx = self.add_constant(value)?;
        self.write_opcode(Opcode::Constant, line);
        self.write(idx, line);
        Ok(idx)
    }

    /// Get the byte at `offset`
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }

    /// Get the constant at `idx`
    pub fn constant(&self, idx: u8) -> Option<Value> {
        self.constants.get(idx as usize).copied()
    }

    /// Get the source line of the byte at `offset`
    pub fn line_at(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    /// Number of instruction bytes
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Check if the chunk holds no instructions
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Get the number of constants
    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }

    /// Clear all instructions, lines and constants
    pub fn clear(&mut self) {
        self.code.clear();
        self.constants.clear();
        self.lines.clear();
    }
}
