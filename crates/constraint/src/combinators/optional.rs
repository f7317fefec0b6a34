//! OPTIONAL combinator - checks `Option` values

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Constraint, Outcome};

/// Lifts a constraint to `Option<T>`.
///
/// `None` passes without calling the child. `Some(v)` is unwrapped and
/// checked. Use [`required`](crate::rules::required) to reject `None`.
pub struct Optional<C, T> {
    inner: C,
    _value: PhantomData<fn(&T)>,
}

impl<C, T> Optional<C, T> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _value: PhantomData,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, T> Constraint for Optional<C, T>
where
    C: Constraint,
    T: Borrow<C::Input>,
{
    type Input = Option<T>;

    fn check(&self, input: &Option<T>) -> Outcome {
        match input {
            None => Ok(()),
            Some(value) => self.inner.check(value.borrow()),
        }
    }
}

impl<C: Clone, T> Clone for Optional<C, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<C: fmt::Debug, T> fmt::Debug for Optional<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional").field("inner", &self.inner).finish()
    }
}

pub fn optional<C, T>(constraint: C) -> Optional<C, T> {
    Optional::new(constraint)
}
