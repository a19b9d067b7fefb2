//! Runtime orchestration for Orion execution
//!
//! The Runtime ties the assembler to a persistent VM, so REPL inputs and
//! repeated calls share one operand stack.

use std::io::{self, Write};
use std::path::Path;

use assembler::Assembler;
use bytecode_system::{disassemble_chunk, Compiler};
use core_types::Value;
use interpreter::{InterpretError, VmConfig, VM};
use tracing::debug;

use crate::error::CliResult;

/// Main runtime that assembles and executes Orion source
pub struct Runtime<O: Write = io::Stdout, E: Write = io::Stderr> {
    /// Whether to print the disassembled chunk before execution
    print_bytecode: bool,
    assembler: Assembler,
    /// Persistent VM instance for maintaining state
    vm: VM<O, E>,
}

impl Runtime {
    /// Create a runtime writing to stdout and stderr
    ///
    /// # Example
    /// ```
    /// use interpreter::VmConfig;
    /// use orion_cli::Runtime;
    ///
    /// let runtime = Runtime::new(VmConfig::default());
    /// assert!(!runtime.is_print_bytecode_enabled());
    /// ```
    pub fn new(config: VmConfig) -> Self {
        Self::with_streams(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Runtime<O, E> {
    /// Create a runtime whose VM writes to the given streams
    pub fn with_streams(config: VmConfig, out: O, err: E) -> Self {
        Self {
            print_bytecode: false,
            assembler: Assembler::new(),
            vm: VM::with_streams(config, out, err),
        }
    }

    /// Enable bytecode printing
    pub fn with_print_bytecode(mut self, enabled: bool) -> Self {
        self.print_bytecode = enabled;
        self
    }

    /// Execute an assembly file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, or if assembling or
    /// running it fails
    ///
    /// # Example
    /// ```no_run
    /// use interpreter::VmConfig;
    /// use orion_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new(VmConfig::default());
    /// let result = runtime.execute_file("example.asm").unwrap();
    /// ```
    pub fn execute_file(&mut self, path: impl AsRef<Path>) -> CliResult<Value> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading source file");
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Assemble and execute a source string
    ///
    /// # Example
    /// ```
    /// use core_types::Value;
    /// use interpreter::VmConfig;
    /// use orion_cli::Runtime;
    ///
    /// let mut runtime: Runtime<Vec<u8>, Vec<u8>> = Runtime::with_streams(VmConfig::default(), Vec::new(), Vec::new());
    /// let result = runtime.execute_string("CONSTANT 2\nINC\nRET").unwrap();
    /// assert_eq!(result, Value::Number(3.0));
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<Value> {
        let chunk = self
            .assembler
            .compile(source)
            .map_err(InterpretError::from)?;

        if self.print_bytecode {
            let listing = disassemble_chunk(&chunk, "code");
            self.vm.output_stream().write_all(listing.as_bytes())?;
        }

        Ok(self.vm.execute(&chunk)?)
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    /// Check if bytecode printing is enabled
    pub fn is_print_bytecode_enabled(&self) -> bool {
        self.print_bytecode
    }

    /// Get access to the VM
    pub fn vm(&self) -> &VM<O, E> {
        &self.vm
    }

    /// Get mutable access to the VM
    pub fn vm_mut(&mut self) -> &mut VM<O, E> {
        &mut self.vm
    }
}
