//! Assembler - encodes instruction lines into a bytecode chunk

use bytecode_system::{Chunk, Compiler, Opcode};
use core_types::{CompileError, Value};
use tracing::debug;

use crate::error::{
    invalid_literal, missing_operand, stack_underflow, unexpected_operand, unknown_instruction,
};
use crate::lexer::{tokenize, Literal, SourceLine};

/// Assembler for Orion bytecode
///
/// Every byte an instruction emits is tagged with the source line it came
/// from, so runtime errors can point back at the assembly text.
///
/// The assembler also tracks how many values each instruction leaves on the
/// operand stack and rejects any instruction that would read past the bottom.
#[derive(Debug, Default)]
pub struct Assembler {
    chunk: Chunk,
    depth: usize,
}

impl Assembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble `source` into a chunk.
    ///
    /// Stops at the first error.
    pub fn assemble(&mut self, source: &str) -> Result<Chunk, CompileError> {
        self.chunk = Chunk::new();
        self.depth = 0;

        for line in tokenize(source) {
            self.assemble_line(&line)?;
        }

        debug!(
            bytes = self.chunk.len(),
            constants = self.chunk.constant_count(),
            "assembled chunk"
        );
        Ok(std::mem::take(&mut self.chunk))
    }

    fn assemble_line(&mut self, line: &SourceLine<'_>) -> Result<(), CompileError> {
        let opcode = Opcode::from_mnemonic(line.mnemonic)
            .ok_or_else(|| unknown_instruction(line.mnemonic, line.number))?;

        let expected = opcode.operand_count();
        if line.operands.len() < expected {
            return Err(missing_operand(opcode.mnemonic(), line.number));
        }
        if let Some(extra) = line.operands.get(expected) {
            return Err(unexpected_operand(opcode.mnemonic(), extra, line.number));
        }

        let inputs = opcode.stack_inputs();
        if self.depth < inputs {
            return Err(stack_underflow(opcode.mnemonic(), line.number));
        }
        self.depth = self.depth - inputs + opcode.stack_outputs();

        match opcode {
            Opcode::Constant => {
                let text = line.operands[0];
                let literal =
                    Literal::parse(text).ok_or_else(|| invalid_literal(text, line.number))?;
                self.emit_constant(literal.into(), line.number)
            }
            _ => {
                self.chunk.write_opcode(opcode, line.number);
                Ok(())
            }
        }
    }

    fn emit_constant(&mut self, value: Value, line: u32) -> Result<(), CompileError> {
        self.chunk
            .emit_constant(value, line)
            .map(|_| ())
            .map_err(|e| CompileError::new(e.to_string(), line))
    }
}

impl Compiler for Assembler {
    fn compile(&mut self, source: &str) -> Result<Chunk, CompileError> {
        self.assemble(source)
    }
}
