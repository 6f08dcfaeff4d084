//! Common test utilities and macros

use pickle::{Binding, Environment, Evaluator, Program, Value};

#[derive(Debug)]
pub enum TestResult {
    Success,
    SuccessWithEnv(Environment),
    Error(String),
    ErrorRegex(String),
}

impl PartialEq for TestResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestResult::Success, TestResult::Success) => true,
            (TestResult::Success, TestResult::SuccessWithEnv(_))
            | (TestResult::SuccessWithEnv(_), TestResult::Success) => true,
            (TestResult::SuccessWithEnv(a), TestResult::SuccessWithEnv(b)) => a == b,
            (TestResult::Error(a), TestResult::Error(b)) => a == b,
            (TestResult::ErrorRegex(pattern), TestResult::Error(msg)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            (TestResult::Error(msg), TestResult::ErrorRegex(pattern)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            _ => false,
        }
    }
}

pub fn run_program_test(program: &Program) -> TestResult {
    match pickle::run_program(program) {
        Ok(env) => TestResult::SuccessWithEnv(env),
        Err(e) => TestResult::Error(e.to_string()),
    }
}

/// Builds an environment out of `(name, value)` pairs.
pub fn env_of<V: Into<Value> + Clone>(pairs: &[(&str, V)]) -> Environment {
    pairs
        .iter()
        .map(|(name, value)| (Binding::from(*name), value.clone().into()))
        .collect()
}

pub fn evaluator() -> Evaluator {
    Evaluator::new().with_trace(true)
}

#[macro_export]
macro_rules! check_program {
    ($test_name:ident, program=$program:expr, result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let program = $program;
            let result = crate::common::run_program_test(&program);
            assert_eq!(result, $expected);
        }
    };
}
