//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The operator
//! set is closed, so pattern matching is exhaustive and unknown operators are
//! rejected when the AST is built.

use yat_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, modulo_by_zero};
use crate::{EvalResult, Value};

/// Checked arithmetic operation with overflow handling.
///
/// Used for Add, Sub, Mul where the only error case is overflow.
#[inline]
fn checked_arith<'a>(result: Option<i64>, op_name: &'static str) -> EvalResult<'a> {
    result.map(Value::Number).ok_or_else(|| integer_overflow(op_name))
}

/// Floor division: rounds toward negative infinity.
///
/// `None` on overflow (`i64::MIN / -1`) or a zero divisor.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder with the sign of the divisor, consistent with [`floor_div`].
///
/// `None` only for a zero divisor.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == -1 {
        // checked_rem reports overflow for i64::MIN % -1; the result is 0.
        return Some(0);
    }
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder.checked_add(b)
    } else {
        Some(remainder)
    }
}

/// Evaluate a binary operation using direct pattern matching.
///
/// Both operands must be numbers; functions and `Void` are a type mismatch.
pub fn evaluate_binary<'a>(left: Value<'a>, right: Value<'a>, op: BinaryOp) -> EvalResult<'a> {
    eval_int_binary(left.as_int()?, right.as_int()?, op)
}

/// Binary operations on integers.
fn eval_int_binary<'a>(a: i64, b: i64, op: BinaryOp) -> EvalResult<'a> {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::FloorDiv => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(floor_div(a, b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(floor_mod(a, b), "modulo")
            }
        }
        BinaryOp::Eq => Ok(Value::bool(a == b)),
        BinaryOp::NotEq => Ok(Value::bool(a != b)),
        BinaryOp::Lt => Ok(Value::bool(a < b)),
        BinaryOp::LtEq => Ok(Value::bool(a <= b)),
        BinaryOp::Gt => Ok(Value::bool(a > b)),
        BinaryOp::GtEq => Ok(Value::bool(a >= b)),
        // Logical results are 0/1, never an operand's magnitude.
        BinaryOp::And => Ok(Value::bool(a != 0 && b != 0)),
        BinaryOp::Or => Ok(Value::bool(a != 0 || b != 0)),
    }
}
