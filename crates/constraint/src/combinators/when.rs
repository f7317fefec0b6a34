//! WHEN combinator - guarded evaluation
//!
//! The guard takes no arguments and is called every time the node is
//! checked, never when it is built. It can therefore read state that changes
//! between building a tree and checking with it, such as another field of
//! the record under validation.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let name = "~";
//! let check = field("name", name, when(|| name != "~", str_len(2, 50)));
//! assert!(check.evaluate().is_ok()); // skipped
//! ```

use crate::foundation::{Checkable, Constraint, Outcome};

/// Runs a child only while a guard holds.
///
/// When the guard returns `false` the child is not called at all and the
/// outcome is `Ok(())`.
///
/// # Type Parameters
///
/// * `C` - The guarded node; a [`Constraint`] or a [`Checkable`]
/// * `G` - The guard (`Fn() -> bool`)
#[derive(Debug, Clone, Copy)]
pub struct When<C, G> {
    inner: C,
    guard: G,
}

impl<C, G> When<C, G> {
    pub fn new(inner: C, guard: G) -> Self {
        Self { inner, guard }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_parts(self) -> (C, G) {
        (self.inner, self.guard)
    }
}

impl<C, G> When<C, G>
where
    G: Fn() -> bool,
{
    fn enabled(&self) -> bool {
        let enabled = (self.guard)();
        if !enabled {
            tracing::trace!("guard is false, skipping");
        }
        enabled
    }
}

impl<C, G> Constraint for When<C, G>
where
    C: Constraint,
    G: Fn() -> bool,
{
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> Outcome {
        if self.enabled() {
            self.inner.check(input)
        } else {
            Ok(())
        }
    }
}

impl<C, G> Checkable for When<C, G>
where
    C: Checkable,
    G: Fn() -> bool,
{
    fn evaluate(&self) -> Outcome {
        if self.enabled() {
            self.inner.evaluate()
        } else {
            Ok(())
        }
    }
}

/// Guards `inner` with `guard`.
pub fn when<G, C>(guard: G, inner: C) -> When<C, G>
where
    G: Fn() -> bool,
{
    When::new(inner, guard)
}
