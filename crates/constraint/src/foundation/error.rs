//! Violation types produced by constraint evaluation
//!
//! A failed check yields a [`Violation`], which is one of three shapes:
//!
//! - [`Violation::Rule`] - a single leaf failure carrying a [`RuleError`]
//! - [`Violation::Field`] - a name attached to a nested violation
//! - [`Violation::List`] - an ordered, never-empty [`ViolationList`]
//!
//! Tags compose positionally. A failure three levels deep renders with every
//! enclosing segment, outer to inner:
//!
//! ```text
//! tags: #1: must have 2 characters at least
//! ```
//!
//! All string fields use `Cow<'static, str>` so static codes, messages and
//! field names never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Result of checking a value: `Ok(())` when every rule holds.
pub type Outcome = Result<(), Violation>;

/// Message parameters, usually zero to two entries.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A single leaf rule failure.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::foundation::RuleError;
///
/// let error = RuleError::new("min_length", "must have 8 characters at least")
///     .with_param("min", "8");
/// assert_eq!(error.to_string(), "must have 8 characters at least");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    /// Machine-readable rule code, e.g. `"min_length"`, `"blank"`.
    pub code: Cow<'static, str>,

    /// Rendered message. This is what `Display` prints.
    pub message: Cow<'static, str>,

    /// Ordered key/value parameters describing the failure.
    pub params: Params,
}

impl RuleError {
    /// Creates a new rule error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates a rule error with the `"custom"` code.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuleError {}

// ============================================================================
// VIOLATION
// ============================================================================

/// A structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A single rule failed.
    #[error("{0}")]
    Rule(RuleError),

    /// A named value failed; `inner` says how.
    #[error("{name}: {inner}")]
    Field {
        name: Cow<'static, str>,
        inner: Box<Violation>,
    },

    /// Several independent failures, in evaluation order.
    #[error("{0}")]
    List(ViolationList),
}

impl Violation {
    /// Creates a leaf violation from a code and message.
    pub fn rule(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Rule(RuleError::new(code, message))
    }

    /// Tags `inner` with a field name.
    pub fn tagged(name: impl Into<Cow<'static, str>>, inner: Violation) -> Self {
        Self::Field {
            name: name.into(),
            inner: Box::new(inner),
        }
    }

    /// Collects violations into a list, or `None` if there are none.
    ///
    /// This is the only way to build a [`Violation::List`], so a list is
    /// never empty.
    pub fn collect<I>(violations: I) -> Option<Self>
    where
        I: IntoIterator<Item = Violation>,
    {
        let members: Vec<Violation> = violations.into_iter().collect();
        if members.is_empty() {
            None
        } else {
            Some(Self::List(ViolationList(members)))
        }
    }

    /// Like [`Violation::collect`], but returns an [`Outcome`].
    pub fn outcome<I>(violations: I) -> Outcome
    where
        I: IntoIterator<Item = Violation>,
    {
        match Self::collect(violations) {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Returns the field name if this is a tagged violation.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field { name, .. } => Some(name.as_ref()),
            _ => None,
        }
    }

    /// Returns the leaf error if this is a single rule failure.
    #[must_use]
    pub fn as_rule(&self) -> Option<&RuleError> {
        match self {
            Self::Rule(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the list if this is an aggregate.
    #[must_use]
    pub fn as_list(&self) -> Option<&ViolationList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Top-level members: the list's entries, or `self` alone.
    #[must_use]
    pub fn members(&self) -> &[Violation] {
        match self {
            Self::List(list) => list.as_slice(),
            other => std::slice::from_ref(other),
        }
    }

    /// Number of top-level members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members().len()
    }

    /// Always false; kept for symmetry with [`Violation::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Renders the violation as text. Same as `to_string()`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Flattens the top-level members into ordered `(field, message)` pairs.
    ///
    /// Tagged members contribute their name and the rendering of what they
    /// wrap; untagged members contribute no name. Member order is kept.
    #[must_use]
    pub fn flatten(&self) -> Vec<FieldMessage> {
        self.members().iter().map(FieldMessage::from_member).collect()
    }

    /// Every leaf rule failure together with its full tag path.
    ///
    /// ```rust,ignore
    /// // tags -> #2 -> "must have 8 characters at most"
    /// assert_eq!(violation.leaves()[0].path_string(), "tags.#2");
    /// ```
    #[must_use]
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.collect_leaves(&mut path, &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, path: &mut Vec<&'a str>, out: &mut Vec<Leaf<'a>>) {
        match self {
            Self::Rule(error) => out.push(Leaf {
                path: path.clone(),
                error,
            }),
            Self::Field { name, inner } => {
                path.push(name.as_ref());
                inner.collect_leaves(path, out);
                path.pop();
            }
            Self::List(list) => {
                for member in list {
                    member.collect_leaves(path, out);
                }
            }
        }
    }

    /// Converts the flattened form into a JSON array of single-entry
    /// objects, e.g. `[{"email": "invalid email"}, {"": "test error"}]`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.flatten()
                .into_iter()
                .map(|pair| {
                    let mut entry = serde_json::Map::with_capacity(1);
                    entry.insert(
                        pair.field.unwrap_or_default(),
                        serde_json::Value::String(pair.message),
                    );
                    serde_json::Value::Object(entry)
                })
                .collect(),
        )
    }
}

impl From<RuleError> for Violation {
    fn from(error: RuleError) -> Self {
        Self::Rule(error)
    }
}

// ============================================================================
// VIOLATION LIST
// ============================================================================

/// A non-empty, ordered list of violations.
///
/// A single-member list renders as that member; longer lists render as
/// `[a, b, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationList(Vec<Violation>);

impl ViolationList {
    /// Number of members. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.0.as_slice() {
            return write!(f, "{only}");
        }

        f.write_str("[")?;
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ============================================================================
// STRUCTURED FORMS
// ============================================================================

/// One `(field, message)` pair of a flattened violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    /// Field tag, absent for untagged members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Rendered message of the member (without the field prefix).
    pub message: String,
}

impl FieldMessage {
    fn from_member(member: &Violation) -> Self {
        match member {
            Violation::Field { name, inner } => Self {
                field: Some(name.to_string()),
                message: inner.to_string(),
            },
            other => Self {
                field: None,
                message: other.to_string(),
            },
        }
    }
}

/// A leaf failure and the tags leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<'a> {
    /// Tag segments, outer to inner.
    pub path: Vec<&'a str>,
    pub error: &'a RuleError,
}

impl Leaf<'_> {
    /// The path joined with `.`; empty for untagged leaves.
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }
}

// ============================================================================
// TESTS
// ============================================================================
