//! Value-level escape hatches
//!
//! - [`Custom`] - an arbitrary `Fn(&T) -> Outcome` used as a constraint
//! - [`Nested`] - runs the value's own [`Validatable::validate`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let even = custom(|n: &i32| {
//!     if n % 2 == 0 { Ok(()) } else { Err(Violation::rule("even", "must be even")) }
//! });
//!
//! let login = Sequence::all().rule(range(20, 30)).rule(nested::<LoginType>());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Constraint, Outcome, Validatable};

// ============================================================================
// CUSTOM
// ============================================================================

/// A constraint backed by a closure.
///
/// # Type Parameters
///
/// * `T` - The type being checked (can be `?Sized`)
/// * `F` - The check function (`Fn(&T) -> Outcome`)
pub struct Custom<T: ?Sized, F> {
    check_fn: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Custom<T, F> {
    pub fn new(check_fn: F) -> Self {
        Self {
            check_fn,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Constraint for Custom<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Outcome,
{
    type Input = T;

    fn check(&self, input: &T) -> Outcome {
        (self.check_fn)(input)
    }
}

impl<T: ?Sized, F: Clone> Clone for Custom<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.check_fn.clone())
    }
}

impl<T: ?Sized, F> fmt::Debug for Custom<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("check_fn", &"<function>")
            .finish()
    }
}

/// Creates a constraint from a closure.
pub fn custom<T, F>(check_fn: F) -> Custom<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Outcome,
{
    Custom::new(check_fn)
}

// ============================================================================
// NESTED
// ============================================================================

/// Checks a value with its own [`Validatable`] implementation.
pub struct Nested<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Nested<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Nested<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Nested<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Nested<T> {}

impl<T: ?Sized> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nested")
    }
}

impl<T> Constraint for Nested<T>
where
    T: Validatable + ?Sized,
{
    type Input = T;

    fn check(&self, input: &T) -> Outcome {
        input.validate()
    }
}

/// Creates a constraint that runs `T::validate`.
#[must_use]
pub fn nested<T>() -> Nested<T>
where
    T: Validatable + ?Sized,
{
    Nested::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Violation;

    #[derive(Clone, Copy)]
    struct LoginType(u8);

    impl Validatable for LoginType {
        fn validate(&self) -> Outcome {
            if self.0 == 25 {
                Ok(())
            } else {
                Err(Violation::rule("login_type", "recursive validation"))
            }
        }
    }

    #[test]
    fn test_custom_runs_closure() {
        let even = custom(|n: &i32| {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err(Violation::rule("even", "must be even"))
            }
        });
        assert!(even.check(&2).is_ok());
        assert_eq!(even.check(&3).unwrap_err().to_string(), "must be even");
    }

    #[test]
    fn test_custom_over_unsized_input() {
        let ascii = custom(|s: &str| {
            if s.is_ascii() {
                Ok(())
            } else {
                Err(Violation::rule("ascii", "must be ascii"))
            }
        });
        assert!(ascii.check("abc").is_ok());
        assert!(ascii.check("абв").is_err());
    }

    #[test]
    fn test_nested_calls_validate() {
        let rule = nested::<LoginType>();
        assert!(rule.check(&LoginType(25)).is_ok());
        assert_eq!(
            rule.check(&LoginType(21)).unwrap_err().to_string(),
            "recursive validation"
        );
    }
}
