//! String rules
//!
//! Lengths are measured in Unicode scalar values (chars), not bytes.
//! "Blank" means empty; whitespace counts as content.

use std::borrow::Cow;

use crate::foundation::{Constraint, Outcome, RuleError, Violation};
use crate::rules::length_error;

// ============================================================================
// NOT BLANK
// ============================================================================

crate::constraint! {
    /// Rejects the empty string.
    pub NotBlank for str;
    rule(input) { !input.is_empty() }
    error(input) { RuleError::new("blank", "cannot be blank") }
    fn not_blank();
}

// ============================================================================
// IF NOT BLANK
// ============================================================================

/// Applies the inner rule only to non-empty strings.
///
/// ```rust,ignore
/// let nickname = if_not_blank(str_min_len(2));
/// assert!(nickname.check("").is_ok());
/// assert!(nickname.check("t").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IfNotBlank<C> {
    inner: C,
}

impl<C> IfNotBlank<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C> Constraint for IfNotBlank<C>
where
    C: Constraint<Input = str>,
{
    type Input = str;

    fn check(&self, input: &str) -> Outcome {
        if input.is_empty() {
            Ok(())
        } else {
            self.inner.check(input)
        }
    }
}

pub fn if_not_blank<C>(inner: C) -> IfNotBlank<C>
where
    C: Constraint<Input = str>,
{
    IfNotBlank::new(inner)
}

// ============================================================================
// LENGTH
// ============================================================================

crate::constraint! {
    /// Length within `min..=max` chars.
    ///
    /// When `min == max` the failure reads "must have N characters".
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub StrLen { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
    error(self, input) { length_error("characters", input.chars().count(), self.min, self.max) }
    new(min: usize, max: usize) {
        assert!(min <= max, "str_len: min ({min}) must not exceed max ({max})");
        Self { min, max }
    }
    fn str_len(min: usize, max: usize);
}

crate::constraint! {
    /// At least `min` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub StrMinLen { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        RuleError::new("min_length", format!("must have {} characters at least", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.chars().count().to_string())
    }
    fn str_min_len(min: usize);
}

crate::constraint! {
    /// At most `max` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub StrMaxLen { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        RuleError::new("max_length", format!("must have {} characters at most", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.chars().count().to_string())
    }
    fn str_max_len(max: usize);
}

// ============================================================================
// CONTAINS
// ============================================================================

crate::constraint! {
    /// Requires the substring `needle`.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { needle: Cow<'static, str> } for str;
    rule(self, input) { input.contains(&*self.needle) }
    error(self, input) {
        RuleError::new("contains", format!("must contain the string \"{}\"", self.needle))
            .with_param("needle", self.needle.clone())
    }
    new(needle: impl Into<Cow<'static, str>>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<Cow<'static, str>>);
}

crate::constraint! {
    /// Requires at least one of the characters in `chars`.
    #[derive(PartialEq, Eq, Hash)]
    pub ContainsAny { chars: Cow<'static, str> } for str;
    rule(self, input) { input.contains(|c: char| self.chars.contains(c)) }
    error(self, input) {
        RuleError::new("contains_any", format!("must contain any of the characters {}", self.chars))
            .with_param("chars", self.chars.clone())
    }
    new(chars: impl Into<Cow<'static, str>>) { Self { chars: chars.into() } }
    fn contains_any(chars: impl Into<Cow<'static, str>>);
}

// ============================================================================
// CONTAINS PREDICATE
// ============================================================================

/// Requires at least one char matching `predicate`.
#[derive(Debug, Clone)]
pub struct ContainsPredicate {
    predicate: fn(char) -> bool,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ContainsPredicate {
    /// A predicate rule reported with the `"contains"` code.
    pub fn new(predicate: fn(char) -> bool, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_code(predicate, "contains", message)
    }

    pub fn with_code(
        predicate: fn(char) -> bool,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            predicate,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Constraint for ContainsPredicate {
    type Input = str;

    fn check(&self, input: &str) -> Outcome {
        if input.chars().any(self.predicate) {
            Ok(())
        } else {
            Err(Violation::rule(self.code.clone(), self.message.clone()))
        }
    }
}

pub fn contains_predicate(
    predicate: fn(char) -> bool,
    message: impl Into<Cow<'static, str>>,
) -> ContainsPredicate {
    ContainsPredicate::new(predicate, message)
}

#[must_use]
pub fn contains_upper() -> ContainsPredicate {
    ContainsPredicate::with_code(
        char::is_uppercase,
        "contains_upper",
        "must contain one upper case character at least",
    )
}

#[must_use]
pub fn contains_lower() -> ContainsPredicate {
    ContainsPredicate::with_code(
        char::is_lowercase,
        "contains_lower",
        "must contain one lower case character at least",
    )
}

#[must_use]
pub fn contains_number() -> ContainsPredicate {
    ContainsPredicate::with_code(
        char::is_numeric,
        "contains_number",
        "must contain one number character at least",
    )
}

// ============================================================================
// TESTS
// ============================================================================
