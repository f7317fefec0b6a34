//! Core traits for the constraint engine
//!
//! - [`Constraint`] - checks a value passed by reference. Leaf rules and
//!   every composite that ranges over a value implement it.
//! - [`Checkable`] - evaluates with no argument. Implemented by nodes that
//!   already hold their subject (bound values, fields, schemas, functions).
//! - [`Validatable`] - a value's own invariants, run by
//!   [`Sequence::self_validated`](crate::combinators::Sequence::self_validated)
//!   and [`Nested`](crate::combinators::Nested).
//! - [`ConstraintExt`] - fluent combinator methods for every constraint.

use std::borrow::{Borrow, Cow};

use crate::combinators::{Each, Named, Optional, Value, When};
use crate::foundation::Outcome;

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A rule over values of type [`Constraint::Input`].
///
/// `check` takes the value explicitly and never mutates the node, so one
/// tree can check any number of values, including from several threads
/// when the node types are `Sync`.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::foundation::{Constraint, Outcome, Violation};
///
/// struct Even;
///
/// impl Constraint for Even {
///     type Input = i64;
///
///     fn check(&self, input: &i64) -> Outcome {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Violation::rule("even", "must be even"))
///         }
///     }
/// }
/// ```
pub trait Constraint {
    /// The type being checked. May be unsized (`str`, `[T]`).
    type Input: ?Sized;

    /// Checks `input`, returning `Ok(())` when the rule holds.
    fn check(&self, input: &Self::Input) -> Outcome;
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> Outcome {
        (**self).check(input)
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> Outcome {
        (**self).check(input)
    }
}

// ============================================================================
// CHECKABLE
// ============================================================================

/// A node that evaluates without an argument.
pub trait Checkable {
    fn evaluate(&self) -> Outcome;
}

impl<K: Checkable + ?Sized> Checkable for Box<K> {
    fn evaluate(&self) -> Outcome {
        (**self).evaluate()
    }
}

impl<K: Checkable + ?Sized> Checkable for &K {
    fn evaluate(&self) -> Outcome {
        (**self).evaluate()
    }
}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A value that can assert its own invariants.
///
/// Implementing this trait does nothing on its own; a tree opts in with
/// [`Sequence::self_validated`](crate::combinators::Sequence::self_validated)
/// or [`nested`](crate::combinators::nested).
///
/// ```rust,ignore
/// struct LoginType(u8);
///
/// impl Validatable for LoginType {
///     fn validate(&self) -> Outcome {
///         if self.0 == 25 { Ok(()) } else { Err(Violation::rule("login_type", "unsupported")) }
///     }
/// }
/// ```
pub trait Validatable {
    fn validate(&self) -> Outcome;
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self) -> Outcome {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> Outcome {
        (**self).validate()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Constraint`].
pub trait ConstraintExt: Constraint + Sized {
    /// Tags failures with `name`.
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(name, self)
    }

    /// Runs only when `guard` returns `true` at check time.
    fn when<G>(self, guard: G) -> When<Self, G>
    where
        G: Fn() -> bool,
    {
        When::new(self, guard)
    }

    /// Lifts the constraint to `Option<T>`; `None` passes.
    fn optional<T>(self) -> Optional<Self, T>
    where
        T: Borrow<Self::Input>,
    {
        Optional::new(self)
    }

    /// Applies the constraint to every element of a slice, first-failure.
    fn each<E>(self) -> Each<Self, E>
    where
        E: Borrow<Self::Input>,
    {
        Each::new(self)
    }

    /// Binds a value, producing a [`Checkable`] node.
    fn bind<T>(self, value: T) -> Value<T, Self>
    where
        T: Borrow<Self::Input>,
    {
        Value::new(value, self)
    }

    /// Erases the concrete type.
    fn boxed<'a>(self) -> Box<dyn Constraint<Input = Self::Input> + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<C: Constraint> ConstraintExt for C {}

// ============================================================================
// TESTS
// ============================================================================
