//! Integration test suite for the Orion VM
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use assembler;
    pub use bytecode_system;
    pub use core_types;
    pub use interpreter;
    pub use orion_cli;
}
