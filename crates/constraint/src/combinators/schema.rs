//! SCHEMA - the root of one validation pass
//!
//! A schema is a bag of independent, already-bound checks, typically one
//! [`Field`](crate::combinators::Field) per member of the record being validated plus any
//! [`Func`](crate::combinators::Func) rules that span several members. It
//! has no name of its own, so its failures are exactly the failures of its
//! checks.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let result = Schema::all()
//!     .field("email", user.email.as_str(), first![not_blank(), email()])
//!     .field("tags", user.tags.as_slice(), len(0, 6))
//!     .func(|| check_quota(&user))
//!     .validate();
//!
//! if let Err(violation) = result {
//!     respond_with(violation.to_json_value());
//! }
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

use crate::combinators::Func;
use crate::foundation::{CheckSemantic, Checkable, Constraint, Outcome, Violation};

/// Independent checks evaluated under one semantic.
pub struct Schema<'a> {
    checks: Vec<Box<dyn Checkable + 'a>>,
    semantic: CheckSemantic,
}

impl<'a> Schema<'a> {
    #[must_use]
    pub fn new(semantic: CheckSemantic) -> Self {
        Self {
            checks: Vec::new(),
            semantic,
        }
    }

    #[must_use]
    pub fn first() -> Self {
        Self::new(CheckSemantic::First)
    }

    #[must_use]
    pub fn all() -> Self {
        Self::new(CheckSemantic::All)
    }

    /// Adds a check.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<K>(mut self, check: K) -> Self
    where
        K: Checkable + 'a,
    {
        self.push(check);
        self
    }

    /// Adds a check in place.
    pub fn push<K>(&mut self, check: K)
    where
        K: Checkable + 'a,
    {
        self.checks.push(Box::new(check));
    }

    /// Adds a named check of `value` against `constraint`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<T, C>(self, name: impl Into<Cow<'static, str>>, value: T, constraint: C) -> Self
    where
        C: Constraint + 'a,
        T: Borrow<C::Input> + 'a,
    {
        self.with(crate::combinators::field(name, value, constraint))
    }

    /// Adds an unnamed closure check.
    #[must_use = "builder methods must be chained or built"]
    pub fn func<F>(self, check_fn: F) -> Self
    where
        F: Fn() -> Outcome + 'a,
    {
        self.with(Func::new(check_fn))
    }

    #[must_use]
    pub fn semantic(&self) -> CheckSemantic {
        self.semantic
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check. Same as [`Checkable::evaluate`].
    pub fn validate(&self) -> Outcome {
        self.evaluate()
    }
}

impl Checkable for Schema<'_> {
    fn evaluate(&self) -> Outcome {
        let outcome = self
            .semantic
            .apply(self.checks.iter().map(|check| check.evaluate()));

        tracing::debug!(
            checks = self.checks.len(),
            failures = outcome.as_ref().err().map_or(0, Violation::len),
            semantic = %self.semantic,
            "schema evaluated"
        );
        outcome
    }
}

impl fmt::Debug for Schema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("checks", &self.checks.len())
            .field("semantic", &self.semantic)
            .finish()
    }
}

impl Default for Schema<'_> {
    fn default() -> Self {
        Self::new(CheckSemantic::default())
    }
}

/// An empty schema with the given semantic.
#[must_use]
pub fn schema<'a>(semantic: CheckSemantic) -> Schema<'a> {
    Schema::new(semantic)
}
