//! Operations of the intermediate representation.
//!
//! The operation set is closed: every consumer matches on [`Operation`]
//! exhaustively, so an unknown operation can only show up while turning a
//! mnemonic into an [`OpKind`].

use crate::error::EvalError;
use crate::value::{Argument, Binding};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Arguments of a call. Most calls take a handful of operands.
pub type CallArgs = SmallVec<[Argument; 4]>;

/// A single operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `lhs = rhs`
    Assign { lhs: Binding, rhs: Argument },
    /// `ret = lhs + rhs`
    Add {
        ret: Binding,
        lhs: Argument,
        rhs: Argument,
    },
    /// `ret = lhs * rhs`
    Mul {
        ret: Binding,
        lhs: Argument,
        rhs: Argument,
    },
    /// `ret = callable(args...)`
    ///
    /// Call has no defined semantics yet. Evaluating one leaves the
    /// environment unchanged.
    Call {
        ret: Binding,
        callable: Binding,
        args: CallArgs,
    },
}

impl Operation {
    pub fn assign(lhs: impl Into<Binding>, rhs: impl Into<Argument>) -> Self {
        Operation::Assign {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn add(
        ret: impl Into<Binding>,
        lhs: impl Into<Argument>,
        rhs: impl Into<Argument>,
    ) -> Self {
        Operation::Add {
            ret: ret.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn mul(
        ret: impl Into<Binding>,
        lhs: impl Into<Argument>,
        rhs: impl Into<Argument>,
    ) -> Self {
        Operation::Mul {
            ret: ret.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn call<I, A>(ret: impl Into<Binding>, callable: impl Into<Binding>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Operation::Call {
            ret: ret.into(),
            callable: callable.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Assign { .. } => OpKind::Assign,
            Operation::Add { .. } => OpKind::Add,
            Operation::Mul { .. } => OpKind::Mul,
            Operation::Call { .. } => OpKind::Call,
        }
    }

    /// The binding this operation writes to.
    pub fn target(&self) -> &Binding {
        match self {
            Operation::Assign { lhs, .. } => lhs,
            Operation::Add { ret, .. }
            | Operation::Mul { ret, .. }
            | Operation::Call { ret, .. } => ret,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Assign { lhs, rhs } => write!(f, "{}: {lhs} = {rhs}", self.kind()),
            Operation::Add { ret, lhs, rhs } => {
                write!(f, "{}: {ret} = {lhs} + {rhs}", self.kind())
            }
            Operation::Mul { ret, lhs, rhs } => {
                write!(f, "{}: {ret} = {lhs} * {rhs}", self.kind())
            }
            Operation::Call {
                ret,
                callable,
                args,
            } => {
                write!(f, "{}: {ret} = `{callable}`(", self.kind())?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Tag of an [`Operation`], as it appears in program dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Call,
    Assign,
    Add,
    Mul,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = match self {
            OpKind::Call => "CALL",
            OpKind::Assign => "ASSIGN",
            OpKind::Add => "ADD",
            OpKind::Mul => "MUL",
        };
        f.write_str(mnemonic)
    }
}

impl FromStr for OpKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CALL" => Ok(OpKind::Call),
            "ASSIGN" => Ok(OpKind::Assign),
            "ADD" => Ok(OpKind::Add),
            "MUL" => Ok(OpKind::Mul),
            _ => Err(EvalError::UnknownOperationKind(s.to_string())),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Mul,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinOp::Add => "Add",
            BinOp::Mul => "Mul",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_kind_and_target() {
        let op = Operation::add("z", "x", "y");
        assert_eq!(op.kind(), OpKind::Add);
        assert_eq!(op.target(), &Binding::from("z"));

        let op = Operation::assign("x", 1i64);
        assert_eq!(op.kind(), OpKind::Assign);
        assert_eq!(op.target(), &Binding::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::assign("x", 1i64).to_string(), "ASSIGN: x = 1");
        assert_eq!(
            Operation::add("z", "x", "y").to_string(),
            "ADD: z = `x` + `y`"
        );
        assert_eq!(
            Operation::mul("zz", "z", 2.5).to_string(),
            "MUL: zz = `z` * 2.5"
        );
        assert_eq!(
            Operation::call(
                "r",
                "f",
                [Argument::from("a"), Argument::from(Value::text("b"))]
            )
            .to_string(),
            "CALL: r = `f`(`a`, b)"
        );
    }

    #[test]
    fn test_call_without_args() {
        let op = Operation::call("r", "f", Vec::<Argument>::new());
        assert_eq!(op.to_string(), "CALL: r = `f`()");
    }

    #[test]
    fn test_parse_mnemonics() {
        for kind in [OpKind::Call, OpKind::Assign, OpKind::Add, OpKind::Mul] {
            assert_eq!(kind.to_string().parse::<OpKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_mnemonic() {
        assert_eq!(
            "SUB".parse::<OpKind>(),
            Err(EvalError::UnknownOperationKind("SUB".to_string()))
        );
        assert!("DIV".parse::<OpKind>().is_err());
        assert!("add".parse::<OpKind>().is_err());
    }
}
