//! The seam between source text and bytecode.

use crate::chunk::Chunk;
use core_types::CompileError;

/// Turns source text into a bytecode chunk.
///
/// The interpreter never parses source itself; it hands the text to a
/// `Compiler` and only runs the resulting chunk if compilation succeeds.
/// Any `FnMut(&str) -> Result<Chunk, CompileError>` is a compiler.
///
/// # Example
///
/// ```
/// use bytecode_system::{Chunk, CompileError, Compiler, Opcode};
///
/// let mut always_nil = |_: &str| -> Result<Chunk, CompileError> {
///     let mut chunk = Chunk::new();
///     chunk.write_opcode(Opcode::Nil, 1);
///     chunk.write_opcode(Opcode::Return, 1);
///     Ok(chunk)
/// };
///
/// let chunk = always_nil.compile("anything").unwrap();
/// assert_eq!(chunk.len(), 2);
/// ```
pub trait Compiler {
    /// Compile `source` into a chunk
    fn compile(&mut self, source: &str) -> Result<Chunk, CompileError>;
}

impl<F> Compiler for F
where
    F: FnMut(&str) -> Result<Chunk, CompileError>,
{
    fn compile(&mut self, source: &str) -> Result<Chunk, CompileError> {
        self(source)
    }
}
