//! Binary arithmetic on runtime values.
//!
//! Integer operands combine with integer semantics, any float operand widens
//! the other side to a float, and text never takes part in arithmetic.
//! Integer results wrap on overflow and float results round per IEEE-754.

use crate::error::{EvalError, EvalResult};
use crate::op::BinOp;
use crate::value::Value;
use num_traits::AsPrimitive;

/// Trait for evaluating binary operations on values.
pub trait BinaryEval {
    /// Evaluates a binary operation on two values.
    ///
    /// # Arguments
    /// * `lhs` - Left operand value
    /// * `rhs` - Right operand value
    ///
    /// # Returns
    /// * `Ok(Value)` - Result of the operation
    /// * `Err(EvalError::UnsupportedOperandType)` - If either operand is not numeric
    fn eval(&self, lhs: Value, rhs: Value) -> EvalResult<Value>;
}

impl BinaryEval for BinOp {
    fn eval(&self, lhs: Value, rhs: Value) -> EvalResult<Value> {
        match (&lhs, &rhs) {
            (Value::Integer(l), Value::Integer(r)) => {
                Ok(Value::Integer(eval_int_binop(*self, *l, *r)))
            }
            (Value::Integer(l), Value::Float(r)) => {
                Ok(Value::Float(eval_float_binop(*self, widen(*l), *r)))
            }
            (Value::Float(l), Value::Integer(r)) => {
                Ok(Value::Float(eval_float_binop(*self, *l, widen(*r))))
            }
            (Value::Float(l), Value::Float(r)) => {
                Ok(Value::Float(eval_float_binop(*self, *l, *r)))
            }
            (Value::Text(_), _) | (_, Value::Text(_)) => {
                Err(EvalError::UnsupportedOperandType {
                    op: *self,
                    lhs: lhs.kind(),
                    rhs: rhs.kind(),
                })
            }
        }
    }
}

fn widen(val: i64) -> f64 {
    val.as_()
}

/// Evaluates a binary operation on signed integers.
fn eval_int_binop(op: BinOp, lhs: i64, rhs: i64) -> i64 {
    match op {
        BinOp::Add => lhs.wrapping_add(rhs),
        BinOp::Mul => lhs.wrapping_mul(rhs),
    }
}

/// Evaluates a binary operation on floats.
fn eval_float_binop(op: BinOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOp::Add => lhs + rhs,
        BinOp::Mul => lhs * rhs,
    }
}
