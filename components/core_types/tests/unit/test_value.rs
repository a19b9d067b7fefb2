//! Unit tests for the Value enum

use core_types::Value;

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_nil() {
        let val = Value::nil();
        assert!(matches!(val, Value::Nil));
    }

    #[test]
    fn test_value_bool_true() {
        let val = Value::bool(true);
        assert!(matches!(val, Value::Bool(true)));
    }

    #[test]
    fn test_value_bool_false() {
        let val = Value::bool(false);
        assert!(matches!(val, Value::Bool(false)));
    }

    #[test]
    fn test_value_number() {
        let val = Value::number(-12.25);
        assert_eq!(val.as_number(), Some(-12.25));
    }

    #[test]
    fn test_value_default_is_nil() {
        assert!(Value::default().is_nil());
    }

    #[test]
    fn test_value_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(2.0), Value::Number(2.0));
    }

    #[test]
    fn test_value_is_copy() {
        let a = Value::number(1.0);
        let b = a;
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod truthiness_tests {
    use super::*;

    #[test]
    fn test_nil_is_falsey() {
        assert!(Value::Nil.is_falsey());
    }

    #[test]
    fn test_false_is_falsey() {
        assert!(Value::Bool(false).is_falsey());
    }

    #[test]
    fn test_true_is_truthy() {
        assert!(!Value::Bool(true).is_falsey());
    }

    #[test]
    fn test_zero_is_truthy() {
        // Zero is truthy: only nil and false are falsey.
        assert!(!Value::Number(0.0).is_falsey());
        assert!(!Value::Number(-0.0).is_falsey());
    }

    #[test]
    fn test_nan_is_truthy() {
        assert!(!Value::Number(f64::NAN).is_falsey());
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_equality_is_reflexive_per_kind() {
        for value in [
            Value::Nil,
            Value::Bool(true),
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-3.5),
            Value::Number(f64::INFINITY),
        ] {
            assert_eq!(value, value, "{:?} should equal itself", value);
        }
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = Value::Number(f64::NAN);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_different_kinds_are_unequal() {
        assert_ne!(Value::Bool(true), Value::Number(1.0));
        assert_ne!(Value::Bool(false), Value::Number(0.0));
        assert_ne!(Value::Nil, Value::Number(0.0));
        assert_ne!(Value::Nil, Value::Bool(false));
    }

    #[test]
    fn test_same_kind_compares_payload() {
        assert_ne!(Value::Number(1.0), Value::Number(2.0));
        assert_ne!(Value::Bool(true), Value::Bool(false));
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_display_nil() {
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_display_booleans() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_display_numbers_use_six_decimals() {
        assert_eq!(Value::Number(7.0).to_string(), "7.000000");
        assert_eq!(Value::Number(0.1).to_string(), "0.100000");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.500000");
        assert_eq!(Value::Number(1234567.0).to_string(), "1234567.000000");
    }

    #[test]
    fn test_display_rounds_to_six_decimals() {
        assert_eq!(Value::Number(1.0 / 3.0).to_string(), "0.333333");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Nil.type_name(), "nil");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Number(1.0).type_name(), "number");
    }
}
