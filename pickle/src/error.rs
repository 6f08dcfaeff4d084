//! Errors raised while evaluating a program.
//!
//! Every error here is recoverable: the evaluator stops at the first one and
//! hands it back to the caller untouched.

use crate::op::BinOp;
use crate::value::{Binding, ValueKind};
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An argument referenced a binding that is not in the environment.
    #[error("unresolved binding: {0}")]
    UnresolvedBinding(Binding),
    /// A binary arithmetic operation received an operand it cannot combine.
    #[error("unsupported types for op {op} (lhs: {lhs}, rhs: {rhs})")]
    UnsupportedOperandType {
        op: BinOp,
        lhs: ValueKind,
        rhs: ValueKind,
    },
    /// An operation mnemonic outside of the supported set.
    #[error("unknown operation kind: {0}")]
    UnknownOperationKind(String),
}
