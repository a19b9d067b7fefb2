//! Orion VM CLI
//!
//! Entry point for the `orion` binary. Parses CLI arguments and delegates
//! to the Runtime for execution.

use std::process::ExitCode;

use clap::Parser;
use orion_cli::logging::init_logging;
use orion_cli::{Cli, CliError, Runtime};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut runtime = Runtime::new(cli.vm_config()).with_print_bytecode(cli.print_bytecode);

    let outcome = if let Some(file) = &cli.file {
        runtime.execute_file(file).map(drop)
    } else if let Some(code) = &cli.eval {
        runtime.execute_string(code).map(drop)
    } else if cli.repl {
        runtime.repl()
    } else {
        print_usage();
        Ok(())
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                match (&e, &cli.file) {
                    (CliError::Io(io), Some(file)) => {
                        eprintln!("Could not read file \"{}\": {}", file, io)
                    }
                    _ => eprintln!("{}", e),
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn print_usage() {
    println!("Orion VM v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  orion --file <FILE>     Run an assembly file");
    println!("  orion --eval <CODE>     Run inline assembly");
    println!("  orion --repl            Start interactive REPL");
    println!();
    println!("Run 'orion --help' for more options.");
}
