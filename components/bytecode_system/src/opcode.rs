//! Bytecode opcodes for the Orion VM
//!
//! Each opcode is encoded as a single byte. `Constant` is the only opcode
//! followed by an inline operand byte (a constant pool index).

/// Bytecode opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Pop the top value, print it and finish the run
    Return = 0,
    /// Push the constant at the index held in the next byte
    Constant = 1,
    /// Push boolean true
    True = 2,
    /// Push boolean false
    False = 3,
    /// Push nil
    Nil = 4,

    // Unary numeric operations (mutate the top slot in place)
    /// Negate the top number
    Negate = 5,
    /// Increment the top number by one
    Inc = 6,
    /// Decrement the top number by one
    Dec = 7,

    // Logical operations
    /// Replace the top value with its falseyness
    Not = 8,
    /// Logical and of the truthiness of the top two values
    And = 9,
    /// Logical or of the truthiness of the top two values
    Or = 10,
    /// Logical xor of the truthiness of the top two values
    Xor = 11,

    // Comparison operations
    /// Equality (==)
    Equal = 12,
    /// Inequality (!=)
    NotEqual = 13,
    /// Greater than or equal (>=)
    GreaterEqual = 14,
    /// Greater than (>)
    Greater = 15,
    /// Less than or equal (<=)
    LessEqual = 16,
    /// Less than (<)
    Less = 17,

    // Arithmetic operations
    /// Add top two numbers
    Add = 18,
    /// Subtract top from second-top
    Sub = 19,
    /// Multiply top two numbers
    Mult = 20,
    /// Divide second-top by top
    Div = 21,
}

impl Opcode {
    /// Every opcode, in encoding order
    pub const ALL: [Opcode; 22] = [
        Opcode::Return,
        Opcode::Constant,
        Opcode::True,
        Opcode::False,
        Opcode::Nil,
        Opcode::Negate,
        Opcode::Inc,
        Opcode::Dec,
        Opcode::Not,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Equal,
        Opcode::NotEqual,
        Opcode::GreaterEqual,
        Opcode::Greater,
        Opcode::LessEqual,
        Opcode::Less,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mult,
        Opcode::Div,
    ];

    /// Assembly mnemonic, as printed by the disassembler
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Return => "RET",
            Opcode::Constant => "CONSTANT",
            Opcode::True => "TRUE",
            Opcode::False => "FALSE",
            Opcode::Nil => "NIL",
            Opcode::Negate => "NEGATE",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Not => "NOT",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Equal => "EQUAL",
            Opcode::NotEqual => "NOT_EQUAL",
            Opcode::GreaterEqual => "GREATER_EQUAL",
            Opcode::Greater => "GREATER",
            Opcode::LessEqual => "LESS_EQUAL",
            Opcode::Less => "LESS",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mult => "MULT",
            Opcode::Div => "DIV",
        }
    }

    /// Look up an opcode by mnemonic, ignoring ASCII case
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Number of inline operand bytes following the opcode
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Constant => 1,
            _ => 0,
        }
    }

    /// Total encoded size in bytes
    pub fn size(self) -> usize {
        1 + self.operand_count()
    }

    /// Number of values the opcode reads from the top of the stack
    pub fn stack_inputs(self) -> usize {
        match self {
            Opcode::Constant | Opcode::True | Opcode::False | Opcode::Nil => 0,
            Opcode::Return
            | Opcode::Negate
            | Opcode::Inc
            | Opcode::Dec
            | Opcode::Not => 1,
            _ => 2,
        }
    }

    /// Number of values the opcode leaves in place of its inputs
    pub fn stack_outputs(self) -> usize {
        match self {
            Opcode::Return => 0,
            _ => 1,
        }
    }

    /// Check if this opcode ends execution
    pub fn is_terminator(self) -> bool {
        matches!(self, Opcode::Return)
    }

    /// Check if this opcode is a binary arithmetic operation
    pub fn is_binary_arithmetic(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Mult | Opcode::Div)
    }

    /// Check if this opcode is an ordering comparison
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Opcode::Greater | Opcode::GreaterEqual | Opcode::Less | Opcode::LessEqual
        )
    }

    /// Check if this opcode mutates the top number in place
    pub fn is_unary_numeric(self) -> bool {
        matches!(self, Opcode::Negate | Opcode::Inc | Opcode::Dec)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}

/// Decode an opcode byte; the error carries the unrecognized byte.
impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(byte as usize).copied().ok_or(byte)
    }
}
