//! Set membership rules
//!
//! Values are stored owned (`T::Owned`) and looked up by reference, so a
//! `str` rule is built from any iterator of things convertible to `String`:
//!
//! ```rust,ignore
//! let language = one_of::<str, _>(["en", "de", "fr"]);
//! assert!(language.check("en").is_ok());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::foundation::{Constraint, Outcome, RuleError};

// ============================================================================
// ONE OF
// ============================================================================

/// Value must be in the set.
pub struct OneOf<T: ?Sized + ToOwned> {
    values: HashSet<T::Owned>,
}

// ============================================================================
// NONE OF
// ============================================================================

/// Value must not be in the set.
pub struct NoneOf<T: ?Sized + ToOwned> {
    values: HashSet<T::Owned>,
}

macro_rules! value_set {
    ($name:ident, $ctor:ident, $accept_if_member:expr, $code:literal, $message:literal) => {
        impl<T> $name<T>
        where
            T: ?Sized + ToOwned + Hash + Eq,
            T::Owned: Hash + Eq,
        {
            pub fn new<I, V>(values: I) -> Self
            where
                I: IntoIterator<Item = V>,
                V: Into<T::Owned>,
            {
                Self {
                    values: values.into_iter().map(Into::into).collect(),
                }
            }

            pub fn values(&self) -> &HashSet<T::Owned> {
                &self.values
            }
        }

        impl<T> Constraint for $name<T>
        where
            T: ?Sized + ToOwned + Hash + Eq,
            T::Owned: Hash + Eq,
        {
            type Input = T;

            fn check(&self, input: &T) -> Outcome {
                if self.values.contains(input) == $accept_if_member {
                    Ok(())
                } else {
                    Err(RuleError::new($code, $message).into())
                }
            }
        }

        impl<T> Clone for $name<T>
        where
            T: ?Sized + ToOwned,
            T::Owned: Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    values: self.values.clone(),
                }
            }
        }

        impl<T> fmt::Debug for $name<T>
        where
            T: ?Sized + ToOwned,
            T::Owned: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("values", &self.values)
                    .finish()
            }
        }

        pub fn $ctor<T, V>(values: impl IntoIterator<Item = V>) -> $name<T>
        where
            T: ?Sized + ToOwned + Hash + Eq,
            T::Owned: Hash + Eq,
            V: Into<T::Owned>,
        {
            $name::new(values)
        }
    };
}

value_set!(OneOf, one_of, true, "one_of", "is not in valid values");
value_set!(NoneOf, none_of, false, "none_of", "is in invalid values");
