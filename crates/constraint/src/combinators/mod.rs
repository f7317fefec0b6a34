//! Combinators for building constraint trees
//!
//! Two families live here:
//!
//! - **Value-ranging** nodes implement [`Constraint`](crate::foundation::Constraint)
//!   and take the value as an argument: [`Sequence`], [`Named`], [`FieldOf`],
//!   [`Each`], [`When`], [`Optional`], [`Custom`], [`Nested`].
//! - **Bound** nodes implement [`Checkable`](crate::foundation::Checkable)
//!   and already own their subject: [`Value`], [`Field`], [`Func`],
//!   [`Schema`]. [`When`] works for both.
//!
//! Failures are tagged on the way up. [`Field`], [`Named`] and [`FieldOf`]
//! add a name, [`Each`] adds `#<index>`, everything else passes its child's
//! violation through unchanged.

mod each;
mod field;
mod func;
mod nested;
mod optional;
mod schema;
mod sequence;
mod value;
mod when;

pub use each::{Each, each, each_all};
pub use field::{Field, FieldOf, Named, field, field_of, named};
pub use func::{Func, func};
pub use nested::{Custom, Nested, custom, nested};
pub use optional::{Optional, optional};
pub use schema::{Schema, schema};
pub use sequence::Sequence;
pub use value::{Value, value};
pub use when::{When, when};
