//! REPL (Read-Eval-Print Loop) implementation
//!
//! Lines are buffered until one of them is a `RET` instruction, then the
//! whole buffer is assembled and run on the runtime's persistent VM, starting
//! from an empty operand stack.

use std::io::Write;

use assembler::lexer::tokenize;
use bytecode_system::Opcode;
use core_types::Value;
use interpreter::trace::show_stack;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;

/// What the REPL should do after a dot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the text and keep reading
    Print(String),
    /// Leave the REPL
    Exit,
}

/// Run the interactive REPL
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for execution
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl<O: Write, E: Write>(runtime: &mut Runtime<O, E>) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("Orion VM v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter instructions; a RET line runs them. Type .help for commands.");
    println!();

    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "> " } else { "... " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if buffer.is_empty() && trimmed.starts_with('.') {
                    match handle_repl_command(trimmed, runtime) {
                        Command::Print(text) => print!("{}", text),
                        Command::Exit => break,
                    }
                    continue;
                }

                buffer.push_str(&line);
                buffer.push('\n');

                if is_input_complete(&buffer) {
                    let _ = editor.add_history_entry(buffer.trim_end());

                    match run_input(runtime, &buffer) {
                        Ok(_) => {}
                        Err(e) if e.is_reported() => {}
                        Err(e) => eprintln!("{}", e),
                    }

                    buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if buffer.is_empty() {
                    println!("Press Ctrl-D or type .exit to quit");
                } else {
                    println!("^C");
                    buffer.clear();
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!();
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Run one complete REPL input on an emptied stack
///
/// Values a previous input left below its result stay visible to `.stack`
/// until the next input starts.
pub fn run_input<O: Write, E: Write>(
    runtime: &mut Runtime<O, E>,
    source: &str,
) -> CliResult<Value> {
    runtime.vm_mut().reset();
    runtime.execute_string(source)
}

/// Handle a dot command
pub fn handle_repl_command<O: Write, E: Write>(
    command: &str,
    runtime: &Runtime<O, E>,
) -> Command {
    match command {
        ".help" => Command::Print(
            "REPL Commands:\n  \
             .help     - Show this help message\n  \
             .stack    - Show the operand stack, bottom first\n  \
             .exit     - Exit the REPL\n"
                .to_string(),
        ),
        ".stack" => Command::Print(show_stack(runtime.vm().stack())),
        ".exit" => Command::Exit,
        _ => Command::Print(format!(
            "Unknown command: {}\nType .help for available commands\n",
            command
        )),
    }
}

/// Check whether the buffered input ends with a `RET` instruction
pub fn is_input_complete(input: &str) -> bool {
    tokenize(input)
        .last()
        .map(|line| Opcode::from_mnemonic(line.mnemonic) == Some(Opcode::Return))
        .unwrap_or(false)
}
