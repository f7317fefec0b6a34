//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_constraint::prelude::*;` import that brings
//! in the traits, the error model, every combinator and every leaf rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let name = first![not_blank(), str_len(2, 50)];
//! let age = range(18, 130);
//! let tags = all![len(0, 6), each_all(str_len(1, 12))];
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, configuration
// ============================================================================

pub use crate::foundation::{
    CheckConfig, CheckSemantic, Checkable, ConfigError, Constraint, ConstraintExt, FieldMessage,
    Leaf, Outcome, RuleError, Validatable, Violation, ViolationList,
};

// ============================================================================
// RULES: All built-in leaf rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Custom, Each, Field, FieldOf, Func, Named, Nested, Optional, Schema, Sequence, Value, When,
    custom, each, each_all, field, field_of, func, named, nested, optional, schema, value, when,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all, constraint, first, rules};
