//! Execution context for a single run

use bytecode_system::Chunk;

/// State of one run over a chunk: the chunk being executed and the
/// instruction pointer into its code.
///
/// The chunk is only read; the instruction pointer only moves forward.
#[derive(Debug, Clone)]
pub struct ExecutionContext<'a> {
    chunk: &'a Chunk,
    /// Offset of the next byte to fetch
    pub instruction_pointer: usize,
}

impl<'a> ExecutionContext<'a> {
    /// Create a context positioned at the start of `chunk`
    pub fn new(chunk: &'a Chunk) -> Self {
        Self {
            chunk,
            instruction_pointer: 0,
        }
    }

    /// The chunk being executed
    pub fn chunk(&self) -> &'a Chunk {
        self.chunk
    }

    /// Read the byte at the instruction pointer and advance past it
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.chunk.byte(self.instruction_pointer)?;
        self.instruction_pointer += 1;
        Some(byte)
    }

    /// Read the byte at the instruction pointer without advancing
    pub fn peek_byte(&self) -> Option<u8> {
        self.chunk.byte(self.instruction_pointer)
    }

    /// Skip `count` bytes
    pub fn advance(&mut self, count: usize) {
        self.instruction_pointer += count;
    }

    /// Source line of the most recently fetched byte.
    ///
    /// The instruction pointer has already moved past the opcode, so the
    /// line comes from the byte just before it.
    pub fn current_line(&self) -> u32 {
        self.instruction_pointer
            .checked_sub(1)
            .and_then(|offset| self.chunk.line_at(offset))
            .unwrap_or(0)
    }
}
