//! VALUE combinator - binds a value to a constraint

use std::borrow::Borrow;

use crate::foundation::{Checkable, Constraint, Outcome};

/// A value paired with the constraint that checks it.
///
/// The value is owned. [`Value::accept`] replaces it without evaluating;
/// [`Checkable::evaluate`] checks whatever value is currently bound.
///
/// Any `T` that borrows as the constraint's input can be bound, so a
/// `String` binds to a `str` rule and a `Vec<String>` to a `[String]` rule.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let mut node = value(String::from("t"), str_min_len(2));
/// assert!(node.evaluate().is_err());
///
/// node.accept(String::from("ok"));
/// assert!(node.evaluate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Value<T, C> {
    value: T,
    constraint: C,
}

impl<T, C> Value<T, C> {
    pub fn new(value: T, constraint: C) -> Self {
        Self { value, constraint }
    }

    /// Replaces the bound value.
    pub fn accept(&mut self, value: T) {
        self.value = value;
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Returns the bound value, dropping the constraint.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C> Checkable for Value<T, C>
where
    C: Constraint,
    T: Borrow<C::Input>,
{
    fn evaluate(&self) -> Outcome {
        self.constraint.check(self.value.borrow())
    }
}

/// Binds `value` to `constraint`.
pub fn value<T, C>(value: T, constraint: C) -> Value<T, C>
where
    C: Constraint,
    T: Borrow<C::Input>,
{
    Value::new(value, constraint)
}
