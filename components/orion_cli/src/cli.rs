//! Command-line arguments

use clap::Parser;
use interpreter::{VmConfig, DEFAULT_STACK_CAPACITY};

/// Orion bytecode VM
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "orion", version, about = "Run Orion bytecode assembly")]
pub struct Cli {
    /// Assembly file to run
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["eval", "repl"])]
    pub file: Option<String>,

    /// Inline assembly to run
    #[arg(short, long, value_name = "CODE", conflicts_with = "repl")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the stack and each instruction as it executes
    #[arg(long)]
    pub trace: bool,

    /// Print the disassembled chunk before running it
    #[arg(long)]
    pub print_bytecode: bool,

    /// Initial operand stack capacity
    #[arg(long, value_name = "N", default_value_t = DEFAULT_STACK_CAPACITY)]
    pub stack_capacity: usize,
}

impl Cli {
    /// Arguments for running `file` with every other option at its default
    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            eval: None,
            repl: false,
            trace: false,
            print_bytecode: false,
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }

    /// VM configuration selected by the flags
    pub fn vm_config(&self) -> VmConfig {
        VmConfig::default()
            .with_trace(self.trace)
            .with_initial_stack_capacity(self.stack_capacity)
    }
}
