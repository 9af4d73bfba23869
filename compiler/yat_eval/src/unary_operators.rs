//! Unary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for unary operations over the closed
//! `UnaryOp` set.

use yat_ir::UnaryOp;

use crate::errors::integer_overflow;
use crate::{EvalResult, Value};

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: Value<'_>, op: UnaryOp) -> EvalResult<'_> {
    let n = value.as_int()?;
    match op {
        // Numeric negation
        UnaryOp::Neg => n
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation")),

        // Logical not: any nonzero integer is true
        UnaryOp::Not => Ok(Value::bool(n == 0)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::EvalErrorKind;

    mod negation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn int_positive() {
            assert_eq!(
                evaluate_unary(Value::Number(3), UnaryOp::Neg).unwrap(),
                Value::Number(-3)
            );
        }

        #[test]
        fn int_negative() {
            assert_eq!(
                evaluate_unary(Value::Number(-5), UnaryOp::Neg).unwrap(),
                Value::Number(5)
            );
        }

        #[test]
        fn int_zero() {
            assert_eq!(
                evaluate_unary(Value::Number(0), UnaryOp::Neg).unwrap(),
                Value::Number(0)
            );
        }

        #[test]
        fn int_min_overflow_errors() {
            let err = evaluate_unary(Value::Number(i64::MIN), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::IntegerOverflow {
                    operation: "negation".to_string()
                }
            );
        }
    }

    mod logical_not {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn nonzero_is_true() {
            assert_eq!(
                evaluate_unary(Value::Number(5), UnaryOp::Not).unwrap(),
                Value::Number(0)
            );
            assert_eq!(
                evaluate_unary(Value::Number(-2), UnaryOp::Not).unwrap(),
                Value::Number(0)
            );
        }

        #[test]
        fn zero_is_false() {
            assert_eq!(
                evaluate_unary(Value::Number(0), UnaryOp::Not).unwrap(),
                Value::Number(1)
            );
        }

        #[test]
        fn double_not_normalizes() {
            let once = evaluate_unary(Value::Number(42), UnaryOp::Not).unwrap();
            assert_eq!(
                evaluate_unary(once, UnaryOp::Not).unwrap(),
                Value::Number(1)
            );
        }
    }

    #[test]
    fn void_operand_is_type_mismatch() {
        assert!(evaluate_unary(Value::Void, UnaryOp::Not).is_err());
        assert!(evaluate_unary(Value::Void, UnaryOp::Neg).is_err());
    }
}
