use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::interpreter::BinaryEval;
use crate::op::{BinOp, Operation};
use crate::program::{BasicBlock, Program};
use crate::value::{Argument, Binding};
use std::fmt;
use tracing::{debug, info};

/// Position of an operation inside a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub block: usize,
    pub op: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}, op {}", self.block, self.op)
    }
}

/// Drives the evaluation of programs.
///
/// The evaluator itself holds no execution state: the environment is threaded
/// through every call, so the same evaluator can run any number of programs.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    trace: bool,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every intermediate environment at `info` level instead of `debug`.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Evaluates a single operation against `env`.
    ///
    /// # Returns
    /// * `Ok(Environment)` - The environment after the operation
    /// * `Err(EvalError)` - If an operand cannot be resolved or combined
    pub fn eval_op(&self, op: &Operation, env: &Environment) -> EvalResult<Environment> {
        debug!("Executing operation: {}", op);

        match op {
            Operation::Assign { lhs, rhs } => {
                let value = env.resolve(rhs)?;
                Ok(env.extend(lhs.clone(), value))
            }
            Operation::Add { ret, lhs, rhs } => self.eval_binary(BinOp::Add, ret, lhs, rhs, env),
            Operation::Mul { ret, lhs, rhs } => self.eval_binary(BinOp::Mul, ret, lhs, rhs, env),
            Operation::Call { ret, callable, .. } => {
                // TODO: define how a call binds its arguments and writes `ret`.
                debug!("Call to `{}` is not evaluated, `{}` left unbound", callable, ret);
                Ok(env.clone())
            }
        }
    }

    fn eval_binary(
        &self,
        op: BinOp,
        ret: &Binding,
        lhs: &Argument,
        rhs: &Argument,
        env: &Environment,
    ) -> EvalResult<Environment> {
        let lhs = env.resolve(lhs)?;
        let rhs = env.resolve(rhs)?;
        let value = op.eval(lhs, rhs)?;
        Ok(env.extend(ret.clone(), value))
    }

    /// Evaluates every operation of a block in order.
    ///
    /// Stops at the first failing operation.
    pub fn eval_block(&self, block: &BasicBlock, env: Environment) -> EvalResult<Environment> {
        block.iter().try_fold(env, |env, op| {
            let next = self.eval_op(op, &env)?;
            self.dump(&next);
            Ok(next)
        })
    }

    /// Evaluates a program starting from `env`.
    pub fn run(&self, program: &Program, env: Environment) -> EvalResult<Environment> {
        info!("Starting evaluation of {} block(s)", program.len());

        let result = program
            .iter()
            .enumerate()
            .try_fold(env, |env, (idx, block)| {
                debug!("Executing block {}", idx);
                self.eval_block(block, env)
            })?;

        info!("Evaluation completed with {} binding(s)", result.len());
        Ok(result)
    }

    /// Evaluates a program and keeps every intermediate environment.
    ///
    /// Unlike [`Evaluator::run`], a failure does not discard the environments
    /// produced before it.
    pub fn run_with_history(&self, program: &Program, env: Environment) -> Run {
        let mut run = Run {
            initial: env,
            steps: Vec::new(),
            failure: None,
        };

        for (block_idx, block) in program.iter().enumerate() {
            debug!("Executing block {}", block_idx);
            for (op_idx, op) in block.iter().enumerate() {
                match self.eval_op(op, run.last_good()) {
                    Ok(next) => {
                        self.dump(&next);
                        run.steps.push(next);
                    }
                    Err(err) => {
                        let location = Location {
                            block: block_idx,
                            op: op_idx,
                        };
                        info!("Evaluation failed at {}: {}", location, err);
                        run.failure = Some((location, err));
                        return run;
                    }
                }
            }
        }
        run
    }

    fn dump(&self, env: &Environment) {
        if self.trace {
            info!("{}", env);
        } else {
            debug!("{}", env);
        }
    }
}

/// Record of a program evaluation.
#[derive(Debug, Clone)]
pub struct Run {
    initial: Environment,
    steps: Vec<Environment>,
    failure: Option<(Location, EvalError)>,
}

impl Run {
    /// Every environment of the run, starting with the initial one.
    pub fn history(&self) -> impl Iterator<Item = &Environment> {
        std::iter::once(&self.initial).chain(self.steps.iter())
    }

    /// Number of operations that completed successfully.
    pub fn steps(&self) -> usize {
        self.steps.len()
    }

    /// The environment produced by the last successful operation.
    pub fn last_good(&self) -> &Environment {
        self.steps.last().unwrap_or(&self.initial)
    }

    pub fn error(&self) -> Option<&EvalError> {
        self.failure.as_ref().map(|(_, err)| err)
    }

    pub fn failed_at(&self) -> Option<Location> {
        self.failure.as_ref().map(|(location, _)| *location)
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> EvalResult<Environment> {
        match self.failure {
            Some((_, err)) => Err(err),
            None => Ok(self.steps.into_iter().last().unwrap_or(self.initial)),
        }
    }
}
