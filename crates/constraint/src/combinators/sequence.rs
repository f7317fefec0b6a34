//! SEQUENCE combinator - ordered children under one check semantic

use std::fmt;

use crate::foundation::{CheckSemantic, Constraint, Outcome, Validatable};

// ============================================================================
// SEQUENCE COMBINATOR
// ============================================================================

/// An ordered list of constraints over the same input.
///
/// Children run in the order they were added. Under
/// [`CheckSemantic::First`] the first failure is returned as-is and later
/// children are never called; under [`CheckSemantic::All`] every child runs
/// and the failures are returned as one list.
///
/// The semantic belongs to this sequence only. A nested sequence keeps its
/// own.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let password = Sequence::first()
///     .rule(not_blank())
///     .rule(str_len(8, 24))
///     .rule(contains_number());
///
/// let err = password.check("t").unwrap_err();
/// assert_eq!(err.to_string(), "must have 8 characters at least");
/// ```
pub struct Sequence<'a, T: ?Sized> {
    rules: Vec<Box<dyn Constraint<Input = T> + 'a>>,
    semantic: CheckSemantic,
    self_check: Option<fn(&T) -> Outcome>,
}

impl<'a, T: ?Sized> Sequence<'a, T> {
    /// Creates an empty sequence with the given semantic.
    #[must_use]
    pub fn new(semantic: CheckSemantic) -> Self {
        Self {
            rules: Vec::new(),
            semantic,
            self_check: None,
        }
    }

    /// An empty first-failure sequence.
    #[must_use]
    pub fn first() -> Self {
        Self::new(CheckSemantic::First)
    }

    /// An empty all-failures sequence.
    #[must_use]
    pub fn all() -> Self {
        Self::new(CheckSemantic::All)
    }

    /// Appends a child.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<Input = T> + 'a,
    {
        self.push(constraint);
        self
    }

    /// Appends a child in place.
    pub fn push<C>(&mut self, constraint: C)
    where
        C: Constraint<Input = T> + 'a,
    {
        self.rules.push(Box::new(constraint));
    }

    /// Runs the input's own [`Validatable::validate`] after the children.
    ///
    /// The self-check behaves as one more child placed last: under
    /// [`CheckSemantic::First`] it only runs when every child passed, under
    /// [`CheckSemantic::All`] it always runs and its failure comes after the
    /// children's.
    #[must_use = "builder methods must be chained or built"]
    pub fn self_validated(mut self) -> Self
    where
        T: Validatable,
    {
        self.self_check = Some(T::validate);
        self
    }

    #[must_use]
    pub fn semantic(&self) -> CheckSemantic {
        self.semantic
    }

    /// Number of children, not counting the self-check.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Sequence<'_, T> {
    fn default() -> Self {
        Self::new(CheckSemantic::default())
    }
}

impl<T: ?Sized> Constraint for Sequence<'_, T> {
    type Input = T;

    fn check(&self, input: &T) -> Outcome {
        let children = self.rules.iter().map(|rule| rule.check(input));
        let self_check = self.self_check.iter().map(|validate| validate(input));

        let outcome = self.semantic.apply(children.chain(self_check));
        if let Err(violation) = &outcome {
            tracing::trace!(
                semantic = %self.semantic,
                failures = violation.len(),
                "sequence failed"
            );
        }
        outcome
    }
}

impl<T: ?Sized> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("rules", &self.rules.len())
            .field("semantic", &self.semantic)
            .field("self_validated", &self.self_check.is_some())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::custom;
    use crate::foundation::Violation;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn fail(message: &'static str) -> impl Constraint<Input = i32> {
        custom(move |_: &i32| Err(Violation::rule("test", message)))
    }

    fn pass() -> impl Constraint<Input = i32> {
        custom(|_: &i32| Ok(()))
    }

    #[test]
    fn test_empty_sequence_passes() {
        assert!(Sequence::<i32>::first().check(&1).is_ok());
        assert!(Sequence::<i32>::all().check(&1).is_ok());
    }

    #[test]
    fn test_first_returns_first_failure_unwrapped() {
        let seq = Sequence::first().rule(pass()).rule(fail("a")).rule(fail("b"));
        let err = seq.check(&0).unwrap_err();
        assert_eq!(err, Violation::rule("test", "a"));
    }

    #[test]
    fn test_first_skips_after_failure() {
        let calls = Cell::new(0);
        let seq = Sequence::first().rule(fail("a")).rule(custom(|_: &i32| {
            calls.set(calls.get() + 1);
            Ok(())
        }));

        assert!(seq.check(&0).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_all_collects_in_order() {
        let seq = Sequence::all().rule(pass()).rule(fail("a")).rule(fail("b"));
        let err = seq.check(&0).unwrap_err();
        let list = err.as_list().expect("all-failures yields a list");
        assert_eq!(list.len(), 2);
        assert_eq!(err.to_string(), "[a, b]");
    }

    #[test]
    fn test_all_passing_collapses_to_ok() {
        let seq = Sequence::all().rule(pass()).rule(pass());
        assert!(seq.check(&0).is_ok());
    }

    #[test]
    fn test_nested_semantic_is_independent() {
        let inner = Sequence::first().rule(fail("x")).rule(fail("y"));
        let outer = Sequence::all().rule(inner).rule(fail("z"));
        assert_eq!(outer.check(&0).unwrap_err().to_string(), "[x, z]");
    }

    struct Even(i32);

    impl Validatable for Even {
        fn validate(&self) -> Outcome {
            if self.0 % 2 == 0 {
                Ok(())
            } else {
                Err(Violation::rule("even", "must be even"))
            }
        }
    }

    fn positive() -> impl Constraint<Input = Even> {
        custom(|e: &Even| {
            if e.0 > 0 {
                Ok(())
            } else {
                Err(Violation::rule("positive", "must be positive"))
            }
        })
    }

    #[test]
    fn test_self_check_first_runs_only_after_children_pass() {
        let seq = Sequence::first().rule(positive()).self_validated();
        assert_eq!(seq.check(&Even(-1)).unwrap_err().to_string(), "must be positive");
        assert_eq!(seq.check(&Even(3)).unwrap_err().to_string(), "must be even");
        assert!(seq.check(&Even(4)).is_ok());
    }

    #[test]
    fn test_self_check_all_is_appended_last() {
        let seq = Sequence::all().rule(positive()).self_validated();
        assert_eq!(
            seq.check(&Even(-1)).unwrap_err().to_string(),
            "[must be positive, must be even]"
        );
    }

    #[test]
    fn test_debug_reports_shape() {
        let seq = Sequence::all().rule(pass());
        assert_eq!(
            format!("{seq:?}"),
            "Sequence { rules: 1, semantic: All, self_validated: false }"
        );
    }
}
