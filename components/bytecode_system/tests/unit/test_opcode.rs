//! Tests for the Opcode enum

use bytecode_system::Opcode;

#[test]
fn test_encoding_round_trips_through_u8() {
    for op in Opcode::ALL {
        let byte: u8 = op.into();
        assert_eq!(Opcode::try_from(byte), Ok(op));
    }
}

#[test]
fn test_return_is_zero() {
    assert_eq!(u8::from(Opcode::Return), 0);
    assert_eq!(u8::from(Opcode::Constant), 1);
}

#[test]
fn test_only_constant_has_operand() {
    for op in Opcode::ALL {
        let expected = if op == Opcode::Constant { 2 } else { 1 };
        assert_eq!(op.size(), expected, "{:?}", op);
    }
}

#[test]
fn test_from_mnemonic_ignores_case() {
    assert_eq!(Opcode::from_mnemonic("add"), Some(Opcode::Add));
    assert_eq!(Opcode::from_mnemonic("Not_Equal"), Some(Opcode::NotEqual));
    assert_eq!(Opcode::from_mnemonic("RET"), Some(Opcode::Return));
    assert_eq!(Opcode::from_mnemonic("push"), None);
}

#[test]
fn test_mnemonics_are_unique() {
    let mut names: Vec<&str> = Opcode::ALL.iter().map(|op| op.mnemonic()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Opcode::ALL.len());
}

#[test]
fn test_opcode_families() {
    assert!(Opcode::Greater.is_ordering());
    assert!(Opcode::GreaterEqual.is_ordering());
    assert!(Opcode::LessEqual.is_ordering());
    assert!(!Opcode::Equal.is_ordering());

    assert!(Opcode::Negate.is_unary_numeric());
    assert!(Opcode::Inc.is_unary_numeric());
    assert!(Opcode::Dec.is_unary_numeric());
    assert!(!Opcode::Not.is_unary_numeric());
}
