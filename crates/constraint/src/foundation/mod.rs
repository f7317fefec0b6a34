//! Core constraint types and traits
//!
//! This module contains the building blocks every other module depends on:
//!
//! - **Traits**: [`Constraint`], [`Checkable`], [`Validatable`], [`ConstraintExt`]
//! - **Errors**: [`Violation`], [`RuleError`], [`ViolationList`], [`FieldMessage`]
//! - **Configuration**: [`CheckSemantic`], [`CheckConfig`]
//!
//! # Architecture
//!
//! ## 1. Values are passed, not stored
//!
//! A [`Constraint`] receives the value it checks as an argument. The same
//! tree can therefore check any number of values without being rebuilt:
//!
//! ```rust,ignore
//! let password = first![not_blank(), str_len(8, 24), contains_number()];
//! assert!(password.check("s3cretpassword").is_ok());
//! assert!(password.check("t").is_err());
//! ```
//!
//! ## 2. Binding is explicit
//!
//! Where a caller wants to pair a value with its rules up front, the value
//! is bound into a [`Checkable`] node ([`Value`](crate::combinators::Value),
//! [`Field`](crate::combinators::Field)) that evaluates without arguments.
//! Schemas are built from such nodes.
//!
//! ## 3. Semantics are fixed at construction
//!
//! Every aggregating combinator carries its own [`CheckSemantic`]. A nested
//! combinator never inherits its parent's semantic.

pub mod config;
pub mod error;
pub mod traits;

pub use config::{CheckConfig, CheckSemantic, ConfigError, SEMANTIC_ENV};
pub use error::{FieldMessage, Leaf, Outcome, Params, RuleError, Violation, ViolationList};
pub use traits::{Checkable, Constraint, ConstraintExt, Validatable};

// ============================================================================
// UTILITIES
// ============================================================================

/// Checks `value` against `constraint`.
///
/// A free-function spelling of [`Constraint::check`] for call sites that
/// read better with the value first.
///
/// ```rust,ignore
/// use nebula_constraint::foundation::check_value;
///
/// check_value("hello", &str_min_len(3))?;
/// ```
pub fn check_value<C>(value: &C::Input, constraint: &C) -> Outcome
where
    C: Constraint + ?Sized,
{
    constraint.check(value)
}

/// Evaluates every node under `semantic`.
pub fn evaluate_all<'a, I>(semantic: CheckSemantic, checks: I) -> Outcome
where
    I: IntoIterator<Item = &'a dyn Checkable>,
{
    semantic.apply(checks.into_iter().map(|check| check.evaluate()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::func;

    #[test]
    fn test_evaluate_all_semantics() {
        let ok = func(|| Ok(()));
        let bad_a = func(|| Err(Violation::rule("a", "a")));
        let bad_b = func(|| Err(Violation::rule("b", "b")));
        let nodes: [&dyn Checkable; 3] = [&ok, &bad_a, &bad_b];

        let first = evaluate_all(CheckSemantic::First, nodes).unwrap_err();
        assert_eq!(first.to_string(), "a");

        let all = evaluate_all(CheckSemantic::All, nodes).unwrap_err();
        assert_eq!(all.to_string(), "[a, b]");
    }
}
