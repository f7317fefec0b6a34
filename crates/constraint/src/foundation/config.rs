//! Check semantics and evaluation configuration
//!
//! Every combinator that aggregates children ([`Sequence`], [`Each`],
//! [`Schema`]) carries its own [`CheckSemantic`], fixed when the node is
//! built. There is no process-wide default that can change under a tree
//! after construction; callers who want one default for a whole tree thread
//! a [`CheckConfig`] through the builders instead.
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let config = CheckConfig::from_env()?;
//! let tags = config.each(config.sequence().rule(not_blank()).rule(str_len(2, 8)));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combinators::{Each, Schema, Sequence};
use crate::foundation::{Outcome, Violation};

/// Environment variable read by [`CheckConfig::from_env`].
pub const SEMANTIC_ENV: &str = "NEBULA_CHECK_SEMANTIC";

// ============================================================================
// CHECK SEMANTIC
// ============================================================================

/// How a combinator treats its children once one of them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSemantic {
    /// Return the first failure and skip the remaining children.
    #[default]
    First,
    /// Evaluate every child and report all failures as a list.
    All,
}

impl CheckSemantic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::All => "all",
        }
    }

    /// Folds child outcomes under this semantic.
    ///
    /// `outcomes` is consumed lazily, so under [`CheckSemantic::First`] no
    /// child after the first failure is evaluated. Under
    /// [`CheckSemantic::All`] every failure is collected in order and an
    /// empty collection is `Ok(())`.
    pub fn apply<I>(self, outcomes: I) -> Outcome
    where
        I: IntoIterator<Item = Outcome>,
    {
        match self {
            Self::First => outcomes.into_iter().collect(),
            Self::All => Violation::outcome(outcomes.into_iter().filter_map(Result::err)),
        }
    }
}

impl fmt::Display for CheckSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckSemantic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            _ => Err(ConfigError::UnknownSemantic(s.to_string())),
        }
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while building a [`CheckConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown check semantic `{0}`, expected `first` or `all`")]
    UnknownSemantic(String),
}

// ============================================================================
// CHECK CONFIG
// ============================================================================

/// Defaults applied when building constraint trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Semantic given to combinators built through this config.
    pub semantic: CheckSemantic,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(semantic: CheckSemantic) -> Self {
        Self { semantic }
    }

    /// Stop at the first failure everywhere.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self::new(CheckSemantic::First)
    }

    /// Report every failure everywhere.
    #[must_use]
    pub const fn exhaustive() -> Self {
        Self::new(CheckSemantic::All)
    }

    /// Reads [`SEMANTIC_ENV`]; an unset variable yields the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`CheckConfig::from_env`], with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(SEMANTIC_ENV) {
            config.semantic = raw.parse()?;
        }
        tracing::debug!(semantic = %config.semantic, "check config loaded");
        Ok(config)
    }

    /// An empty [`Sequence`] using this config's semantic.
    #[must_use]
    pub fn sequence<'a, T: ?Sized>(&self) -> Sequence<'a, T> {
        Sequence::new(self.semantic)
    }

    /// Wraps `constraint` in an [`Each`] using this config's semantic.
    #[must_use]
    pub fn each<C, E>(&self, constraint: C) -> Each<C, E> {
        Each::with_semantic(constraint, self.semantic)
    }

    /// An empty [`Schema`] using this config's semantic.
    #[must_use]
    pub fn schema<'a>(&self) -> Schema<'a> {
        Schema::new(self.semantic)
    }
}

// ============================================================================
// TESTS
// ============================================================================
