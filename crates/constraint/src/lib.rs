//! # nebula-constraint
//!
//! A declarative constraint engine: build a tree of rules, check values
//! against it, get back either `Ok(())` or a structured [`Violation`]
//! that says which field, which element and which rule failed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let password = first![not_blank(), str_len(8, 24), contains_number()];
//! assert_eq!(
//!     password.check("t").unwrap_err().to_string(),
//!     "must have 8 characters at least"
//! );
//!
//! let tags = vec!["tag1".to_string(), "dd".into(), "loooong".into()];
//! let result = Schema::all()
//!     .field("tags", tags, all![len(2, 12), each_all(all![not_blank(), str_len(2, 8)])])
//!     .validate();
//! ```
//!
//! ## Building Blocks
//!
//! - [`foundation`] - the [`Constraint`](foundation::Constraint) and
//!   [`Checkable`](foundation::Checkable) traits, the error model and
//!   [`CheckConfig`](foundation::CheckConfig)
//! - [`combinators`] - sequences, fields, per-element, guarded, optional
//!   and schema nodes
//! - [`rules`] - leaf predicates
//!
//! Use the [`constraint!`] macro to define new leaf rules, and [`first!`],
//! [`all!`] or [`rules!`] to build sequences.
//!
//! [`Violation`]: foundation::Violation

// Violation is the one error type threaded through every check; boxing it
// would add an allocation to every failing leaf.
#![allow(clippy::result_large_err)]
// Nested combinators (Each<Sequence<..>, ..>, FieldOf<P, U, C, F>) produce
// long types by construction.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
