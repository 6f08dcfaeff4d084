//! Hand-built programs used by the `pickle` binary.
//!
//! There is no text front-end yet, so the binary evaluates these instead.

use crate::op::Operation;
use crate::program::{BasicBlock, Program};

/// The reference program: a handful of assignments and arithmetic, followed
/// by a read of the unbound name `bad` when `with_error_op` is set.
///
/// ```text
/// x = 1; y = 2; z = x + y; zz = z * z; x = zz; [x = bad]
/// ```
pub fn reference_program(with_error_op: bool) -> Program {
    let mut block = BasicBlock::new(vec![
        Operation::assign("x", 1i64),
        Operation::assign("y", 2i64),
        Operation::add("z", "x", "y"),
        Operation::mul("zz", "z", "z"),
        Operation::assign("x", "zz"),
    ]);
    if with_error_op {
        block.push(Operation::assign("x", "bad"));
    }
    Program::new(vec![block])
}
