//! FIELD combinators - attach a name to whatever a child reports
//!
//! - [`Field`] tags a bound node (usually a [`Value`]) and is [`Checkable`].
//! - [`Named`] tags a constraint and stays a [`Constraint`].
//! - [`FieldOf`] projects one field out of a parent value through an
//!   accessor, checks it, and tags the result.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::marker::PhantomData;

use crate::combinators::Value;
use crate::foundation::{Checkable, Constraint, Outcome, Violation};

// ============================================================================
// FIELD (BOUND)
// ============================================================================

/// A named, bound check.
///
/// On failure the child's violation is wrapped in
/// [`Violation::Field`] carrying this name; success passes through.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let email = field("email", "nope", email());
/// assert_eq!(email.evaluate().unwrap_err().to_string(), "email: invalid email");
/// ```
#[derive(Debug, Clone)]
pub struct Field<K> {
    name: Cow<'static, str>,
    inner: K,
}

impl<K> Field<K> {
    /// Wraps any [`Checkable`] under `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: K) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }

    pub fn into_inner(self) -> K {
        self.inner
    }
}

impl<T, C> Field<Value<T, C>> {
    /// Replaces the bound value.
    pub fn accept(&mut self, value: T) {
        self.inner.accept(value);
    }
}

impl<K: Checkable> Checkable for Field<K> {
    fn evaluate(&self) -> Outcome {
        self.inner.evaluate().map_err(|violation| {
            tracing::trace!(field = %self.name, "field failed");
            Violation::tagged(self.name.clone(), violation)
        })
    }
}

/// Binds `value` to `constraint` and names the result.
pub fn field<T, C>(name: impl Into<Cow<'static, str>>, value: T, constraint: C) -> Field<Value<T, C>>
where
    C: Constraint,
    T: Borrow<C::Input>,
{
    Field::new(name, Value::new(value, constraint))
}

// ============================================================================
// NAMED (UNBOUND)
// ============================================================================

/// A constraint whose failures are tagged with a name.
#[derive(Debug, Clone)]
pub struct Named<C> {
    name: Cow<'static, str>,
    inner: C,
}

impl<C> Named<C> {
    pub fn new(name: impl Into<Cow<'static, str>>, inner: C) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Constraint> Constraint for Named<C> {
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> Outcome {
        self.inner
            .check(input)
            .map_err(|violation| Violation::tagged(self.name.clone(), violation))
    }
}

/// Tags failures of `constraint` with `name`.
pub fn named<C>(name: impl Into<Cow<'static, str>>, constraint: C) -> Named<C> {
    Named::new(name, constraint)
}

// ============================================================================
// FIELD OF (ACCESSOR)
// ============================================================================

/// Checks one field of a parent value.
///
/// # Type Parameters
///
/// * `P` - The parent type
/// * `U` - The field type (can be `?Sized`)
/// * `C` - The constraint applied to the field
/// * `F` - The accessor function type
///
/// A [`Sequence`](crate::combinators::Sequence) of `FieldOf` nodes over the
/// same parent is a reusable schema for that type; it can be wrapped in
/// [`Each`](crate::combinators::Each) to check a list of records.
///
/// ```rust,ignore
/// let user = Sequence::all()
///     .rule(field_of("name", not_blank(), |u: &User| u.name.as_str()))
///     .rule(field_of("age", range(18, 130), |u: &User| &u.age));
/// ```
pub struct FieldOf<P, U, C, F>
where
    P: ?Sized,
    U: ?Sized,
{
    name: Cow<'static, str>,
    constraint: C,
    accessor: F,
    _marker: PhantomData<fn(&P) -> &U>,
}

impl<P, U, C, F> FieldOf<P, U, C, F>
where
    P: ?Sized,
    U: ?Sized,
{
    pub fn new(name: impl Into<Cow<'static, str>>, constraint: C, accessor: F) -> Self {
        Self {
            name: name.into(),
            constraint,
            accessor,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P, U, C, F> Constraint for FieldOf<P, U, C, F>
where
    P: ?Sized,
    U: ?Sized,
    C: Constraint<Input = U>,
    F: Fn(&P) -> &U,
{
    type Input = P;

    fn check(&self, input: &P) -> Outcome {
        self.constraint
            .check((self.accessor)(input))
            .map_err(|violation| {
                tracing::trace!(field = %self.name, "field failed");
                Violation::tagged(self.name.clone(), violation)
            })
    }
}

impl<P, U, C, F> fmt::Debug for FieldOf<P, U, C, F>
where
    P: ?Sized,
    U: ?Sized,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOf")
            .field("name", &self.name)
            .field("constraint", &self.constraint)
            .field("accessor", &"<function>")
            .finish()
    }
}

/// Checks the field selected by `accessor` with `constraint`, tagged `name`.
pub fn field_of<P, U, C, F>(
    name: impl Into<Cow<'static, str>>,
    constraint: C,
    accessor: F,
) -> FieldOf<P, U, C, F>
where
    P: ?Sized,
    U: ?Sized,
    C: Constraint<Input = U>,
    F: Fn(&P) -> &U,
{
    FieldOf::new(name, constraint, accessor)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::Sequence;
    use crate::rules::{not_blank, range, str_min_len};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_tags_failure() {
        let node = field("name", "", not_blank());
        let err = node.evaluate().unwrap_err();
        assert_eq!(err.to_string(), "name: cannot be blank");
        assert_eq!(err.field_name(), Some("name"));

        let flat = err.flatten();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].field.as_deref(), Some("name"));
        assert_eq!(flat[0].message, "cannot be blank");
    }

    #[test]
    fn test_field_passes_through_success() {
        assert!(field("name", "bob", not_blank()).evaluate().is_ok());
    }

    #[test]
    fn test_field_accept_forwards() {
        let mut node = field("name", String::new(), not_blank());
        assert!(node.evaluate().is_err());
        node.accept("bob".to_string());
        assert!(node.evaluate().is_ok());
    }

    #[test]
    fn test_named_tags_constraint() {
        let rule = named("age", range(18, 130));
        assert_eq!(
            rule.check(&5).unwrap_err().to_string(),
            "age: is less than minimum 18"
        );
    }

    struct User {
        name: String,
        age: u32,
    }

    #[test]
    fn test_field_of_projects_and_tags() {
        let schema = Sequence::all()
            .rule(field_of("name", str_min_len(2), |u: &User| u.name.as_str()))
            .rule(field_of("age", range(18, 130), |u: &User| &u.age));

        let ok = User {
            name: "bob".into(),
            age: 30,
        };
        assert!(schema.check(&ok).is_ok());

        let bad = User {
            name: "b".into(),
            age: 3,
        };
        assert_eq!(
            schema.check(&bad).unwrap_err().to_string(),
            "[name: must have 2 characters at least, age: is less than minimum 18]"
        );
    }
}
