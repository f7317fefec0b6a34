//! EACH combinator - checks every element of a slice

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{CheckSemantic, Constraint, Outcome, Violation};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies one constraint to every element of a slice.
///
/// Elements are checked in index order and each failure is tagged with its
/// zero-based position, `#0`, `#1`, ... The element type `E` only has to
/// borrow as the inner constraint's input, so a `str` rule checks a
/// `[String]`.
///
/// The semantic is fixed when the node is built and governs only how
/// element failures are combined:
///
/// - [`CheckSemantic::First`] returns the first tagged failure.
/// - [`CheckSemantic::All`] returns a list of every tagged failure.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let tags = each_all(str_len(2, 8));
/// let err = tags.check(&["tag1", "d", "loooooong"]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "[#1: must have 2 characters at least, #2: must have 8 characters at most]"
/// );
/// ```
pub struct Each<C, E> {
    inner: C,
    semantic: CheckSemantic,
    _element: PhantomData<fn(&E)>,
}

impl<C, E> Each<C, E> {
    /// Creates an EACH combinator that stops at the first failing element.
    pub fn new(inner: C) -> Self {
        Self::with_semantic(inner, CheckSemantic::First)
    }

    /// Creates an EACH combinator with an explicit semantic.
    pub fn with_semantic(inner: C, semantic: CheckSemantic) -> Self {
        Self {
            inner,
            semantic,
            _element: PhantomData,
        }
    }

    #[must_use]
    pub fn semantic(&self) -> CheckSemantic {
        self.semantic
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner constraint.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, E> Constraint for Each<C, E>
where
    C: Constraint,
    E: Borrow<C::Input>,
{
    type Input = [E];

    fn check(&self, input: &[E]) -> Outcome {
        let outcomes = input.iter().enumerate().map(|(index, element)| {
            self.inner.check(element.borrow()).map_err(|violation| {
                tracing::trace!(index, semantic = %self.semantic, "element failed");
                Violation::tagged(format!("#{index}"), violation)
            })
        });
        self.semantic.apply(outcomes)
    }
}

impl<C: Clone, E> Clone for Each<C, E> {
    fn clone(&self) -> Self {
        Self::with_semantic(self.inner.clone(), self.semantic)
    }
}

impl<C: fmt::Debug, E> fmt::Debug for Each<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each")
            .field("inner", &self.inner)
            .field("semantic", &self.semantic)
            .finish()
    }
}

/// Creates an EACH combinator that stops at the first failing element.
pub fn each<C, E>(constraint: C) -> Each<C, E> {
    Each::new(constraint)
}

/// Creates an EACH combinator that reports every failing element.
pub fn each_all<C, E>(constraint: C) -> Each<C, E> {
    Each::with_semantic(constraint, CheckSemantic::All)
}

// ============================================================================
// TESTS
// ============================================================================
