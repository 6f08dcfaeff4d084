//! Pickle Interpreter Library
//!
//! Evaluates programs written in a small register-like intermediate
//! representation. A [`Program`] is a list of straight-line [`BasicBlock`]s,
//! and each [`Operation`] reads bindings from the current [`Environment`] and
//! writes its result into a new one.
//!
//! Programs are built in memory; there is no text front-end.

pub mod demo;
pub mod env;
pub mod error;
pub mod interpreter;
pub mod op;
pub mod program;
pub mod value;

pub use crate::env::Environment;
pub use crate::error::{EvalError, EvalResult};
pub use crate::interpreter::evaluator::{Evaluator, Location, Run};
pub use crate::op::{BinOp, OpKind, Operation};
pub use crate::program::{BasicBlock, Program};
pub use crate::value::{Argument, Binding, Value, ValueKind};

use anyhow::Result;

/// Evaluate a program starting from an empty environment.
///
/// # Arguments
/// * `program` - The program to evaluate
///
/// # Returns
/// * `Ok(Environment)` - The environment after the last operation
/// * `Err(anyhow::Error)` - Evaluation failed, wrapping the [`EvalError`] unchanged
///
/// # Examples
/// ```
/// use pickle::{BasicBlock, Operation, Program, Value, run_program};
///
/// let program = Program::new(vec![BasicBlock::new(vec![
///     Operation::assign("x", 20i64),
///     Operation::add("y", "x", 22i64),
/// ])]);
/// let env = run_program(&program).unwrap();
/// assert_eq!(env.get("y"), Some(&Value::Integer(42)));
/// ```
pub fn run_program(program: &Program) -> Result<Environment> {
    Ok(Evaluator::new().run(program, Environment::new())?)
}
