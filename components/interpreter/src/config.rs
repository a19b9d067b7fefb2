//! VM configuration

use crate::stack::DEFAULT_STACK_CAPACITY;

/// Runtime options for a [`VM`](crate::VM)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// Dump the stack and the next instruction before each step
    pub trace: bool,
    /// Slots allocated for the operand stack before its first growth
    pub initial_stack_capacity: usize,
}

impl VmConfig {
    /// Enable or disable instruction tracing
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Set the initial operand stack capacity (at least 1)
    pub fn with_initial_stack_capacity(mut self, capacity: usize) -> Self {
        self.initial_stack_capacity = capacity.max(1);
        self
    }
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            trace: false,
            initial_stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}
