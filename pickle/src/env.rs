//! Run-time environment of an execution.
//!
//! An [`Environment`] is a complete snapshot of every binding at one point of
//! the program. It is never mutated while an operation is evaluated: every
//! step produces a new snapshot and the previous one stays valid.

use crate::error::{EvalError, EvalResult};
use crate::value::{Argument, Binding, Value};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<Binding, Value>,
}

impl Environment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&Binding, &Value)> {
        self.bindings.iter()
    }

    /// Returns a new environment where `binding` maps to `value`.
    ///
    /// The binding is inserted if new and shadowed if it already exists.
    /// `self` is left untouched.
    pub fn extend(&self, binding: Binding, value: Value) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.insert(binding, value);
        Environment { bindings }
    }

    /// Resolves an argument into a concrete value.
    ///
    /// # Returns
    /// * `Ok(Value)` - The literal itself, or the value bound to the name
    /// * `Err(EvalError::UnresolvedBinding)` - If the name is not bound
    pub fn resolve(&self, arg: &Argument) -> EvalResult<Value> {
        match arg {
            Argument::Value(value) => Ok(value.clone()),
            Argument::Binding(binding) => self
                .bindings
                .get(binding)
                .cloned()
                .ok_or_else(|| EvalError::UnresolvedBinding(binding.clone())),
        }
    }
}

impl FromIterator<(Binding, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (Binding, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "env: {{")?;
        for (name, value) in &self.bindings {
            writeln!(f, "\t`{name}`: {value},")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_environment_is_empty() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
        assert_eq!(env.get("x"), None);
    }

    #[test]
    fn test_extend_leaves_original_untouched() {
        let env = Environment::new().extend("x".into(), Value::Integer(1));
        let next = env.extend("x".into(), Value::Integer(2));

        assert_eq!(env.get("x"), Some(&Value::Integer(1)));
        assert_eq!(next.get("x"), Some(&Value::Integer(2)));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_resolve_literal() {
        let env = Environment::new();
        let value = env.resolve(&Argument::from(5i64)).unwrap();
        assert_eq!(value, Value::Integer(5));
    }

    #[test]
    fn test_resolve_binding() {
        let env = Environment::new().extend("y".into(), Value::Float(0.25));
        assert_eq!(env.resolve(&Argument::from("y")).unwrap(), Value::Float(0.25));
    }

    #[test]
    fn test_resolve_unbound() {
        let env = Environment::new();
        let result = env.resolve(&Argument::from("missing"));
        assert_eq!(
            result,
            Err(EvalError::UnresolvedBinding(Binding::from("missing")))
        );
    }

    #[test]
    fn test_display_is_sorted() {
        let env: Environment = [
            (Binding::from("y"), Value::Integer(2)),
            (Binding::from("x"), Value::text("one")),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.to_string(), "env: {\n\t`x`: one,\n\t`y`: 2,\n}");
    }
}
