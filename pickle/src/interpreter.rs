//! This module provides the evaluation core of the interpreter.
//!
//! It folds a program over an environment, one operation at a time. Every
//! operation produces a fresh environment, so each intermediate state can be
//! kept around and inspected.

mod arith;
pub mod evaluator;

pub use arith::BinaryEval;
