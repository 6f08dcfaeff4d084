//! Basic blocks and programs.
//!
//! A [`Program`] owns its blocks and a [`BasicBlock`] owns its operations.
//! Both are built once and only read during evaluation.

use crate::op::Operation;
use std::fmt;

/// A straight-line sequence of operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicBlock {
    pub ops: Vec<Operation>,
}

impl BasicBlock {
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }
}

impl FromIterator<Operation> for BasicBlock {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Blocks executed in order. The environment left by one block is the
/// starting environment of the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub blocks: Vec<BasicBlock>,
}

impl Program {
    pub fn new(blocks: Vec<BasicBlock>) -> Self {
        Self { blocks }
    }

    pub fn push(&mut self, block: BasicBlock) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BasicBlock> {
        self.blocks.iter()
    }
}

impl FromIterator<BasicBlock> for Program {
    fn from_iter<I: IntoIterator<Item = BasicBlock>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, block) in self.blocks.iter().enumerate() {
            writeln!(f, "Block [{idx}]: {{")?;
            for (op_idx, op) in block.iter().enumerate() {
                writeln!(f, "\t{op_idx}: {op}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
