//! Virtual Machine for bytecode execution
//!
//! Main entry point for running Orion chunks.

use std::io::{self, Write};

use bytecode_system::{Chunk, Compiler};
use core_types::Value;
use tracing::debug;

use crate::config::VmConfig;
use crate::context::ExecutionContext;
use crate::dispatch::Dispatcher;
use crate::error::InterpretResult;
use crate::stack::Stack;

/// Virtual Machine for executing Orion bytecode
///
/// The VM owns:
/// - The dispatcher and its operand stack
/// - The output stream that receives returned values and trace output
/// - The error stream that receives runtime diagnostics
///
/// Streams default to stdout and stderr; tests pass `Vec<u8>` buffers.
#[derive(Debug)]
pub struct VM<O: Write = io::Stdout, E: Write = io::Stderr> {
    /// Dispatcher for bytecode execution
    dispatcher: Dispatcher,
    config: VmConfig,
    out: O,
    err: E,
}

impl VM {
    /// Create a new VM writing to stdout and stderr
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    /// Create a VM with the given configuration, writing to stdout and stderr
    pub fn with_config(config: VmConfig) -> Self {
        Self::with_streams(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> VM<O, E> {
    /// Create a VM writing to the given streams
    pub fn with_streams(config: VmConfig, out: O, err: E) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.initial_stack_capacity, config.trace),
            config,
            out,
            err,
        }
    }

    /// Compile `source` with `compiler` and run the result
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The value returned by the chunk
    /// * `Err(InterpretError::Compile)` - The compiler rejected the source; nothing ran
    /// * `Err(InterpretError::Runtime)` - An operator got an operand of the wrong kind
    pub fn interpret<C: Compiler + ?Sized>(
        &mut self,
        source: &str,
        compiler: &mut C,
    ) -> InterpretResult<Value> {
        let chunk = compiler.compile(source)?;
        self.execute(&chunk)
    }

    /// Execute a bytecode chunk and return the value its `Return` produces
    ///
    /// # Example
    ///
    /// ```
    /// use interpreter::{VmConfig, VM};
    /// use bytecode_system::{Chunk, Opcode};
    ///
    /// let mut vm: VM<Vec<u8>, Vec<u8>> = VM::with_streams(VmConfig::default(), Vec::new(), Vec::new());
    /// let mut chunk = Chunk::new();
    /// chunk.write_opcode(Opcode::True, 1);
    /// chunk.write_opcode(Opcode::Not, 1);
    /// chunk.write_opcode(Opcode::Return, 1);
    ///
    /// vm.execute(&chunk).unwrap();
    /// assert_eq!(String::from_utf8_lossy(vm.output()), "false\n");
    /// ```
    pub fn execute(&mut self, chunk: &Chunk) -> InterpretResult<Value> {
        debug!(
            bytes = chunk.len(),
            constants = chunk.constant_count(),
            "executing chunk"
        );
        let mut ctx = ExecutionContext::new(chunk);
        let result = self
            .dispatcher
            .execute(&mut ctx, &mut self.out, &mut self.err);
        let flushed = self.out.flush();
        let value = result?;
        flushed?;
        Ok(value)
    }

    /// Turn instruction tracing on or off for later runs
    pub fn set_trace(&mut self, enabled: bool) {
        self.config.trace = enabled;
        self.dispatcher.set_trace(enabled);
    }

    /// The operand stack as left by the last run
    pub fn stack(&self) -> &Stack {
        self.dispatcher.stack()
    }

    /// Empty the operand stack
    pub fn reset(&mut self) {
        self.dispatcher.reset_stack();
    }

    /// Configuration the VM was built with
    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    /// Stream that receives returned values and trace output
    pub fn output_stream(&mut self) -> &mut O {
        &mut self.out
    }

    /// Release the output and error streams
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<E: Write> VM<Vec<u8>, E> {
    /// Everything written to the output buffer so far
    pub fn output(&self) -> &[u8] {
        &self.out
    }
}

impl<O: Write> VM<O, Vec<u8>> {
    /// Everything written to the error buffer so far
    pub fn error_output(&self) -> &[u8] {
        &self.err
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
