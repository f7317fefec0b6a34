//! FUNC combinator - a zero-argument check
//!
//! Used for rules that span several fields, placed directly in a
//! [`Schema`](crate::combinators::Schema):
//!
//! ```rust,ignore
//! let schema = Schema::all()
//!     .field("tags", &user.tags, len(0, 6))
//!     .func(|| {
//!         if user.tags.len() > 3 && user.name.is_empty() {
//!             Err(Violation::rule("custom", "named users only"))
//!         } else {
//!             Ok(())
//!         }
//!     });
//! ```

use std::fmt;

use crate::foundation::{Checkable, Outcome};

/// A [`Checkable`] backed by a closure.
#[derive(Clone, Copy)]
pub struct Func<F> {
    check_fn: F,
}

impl<F> Func<F>
where
    F: Fn() -> Outcome,
{
    pub fn new(check_fn: F) -> Self {
        Self { check_fn }
    }
}

impl<F> Checkable for Func<F>
where
    F: Fn() -> Outcome,
{
    fn evaluate(&self) -> Outcome {
        (self.check_fn)()
    }
}

impl<F> fmt::Debug for Func<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func(<function>)")
    }
}

pub fn func<F>(check_fn: F) -> Func<F>
where
    F: Fn() -> Outcome,
{
    Func::new(check_fn)
}
