//! Leaf rules
//!
//! Stateless predicates that every tree bottoms out in. Each rule is a
//! small struct implementing [`Constraint`](crate::foundation::Constraint)
//! plus a factory function, mostly generated by [`constraint!`](crate::constraint).
//!
//! | Module | Rules |
//! |--------|-------|
//! | [`string`] | `not_blank`, `if_not_blank`, `str_len`, `str_min_len`, `str_max_len`, `contains`, `contains_any`, `contains_upper`, `contains_lower`, `contains_number`, `contains_predicate` |
//! | [`length`] | `len`, `len_map` |
//! | [`range`] | `range`, `min`, `max` |
//! | [`membership`] | `one_of`, `none_of` |
//! | [`pattern`] | `pattern`, `try_pattern`, `email` |
//! | [`required`] | `required` |
//!
//! Constructors panic on arguments that can never describe a valid rule,
//! such as `str_len(8, 2)`. Such a panic is a bug at the call site, not a
//! validation failure, and never shows up in an outcome.

pub mod length;
pub mod membership;
pub mod pattern;
pub mod range;
pub mod required;
pub mod string;

pub use length::{Len, MapLen, len, len_map};
pub use membership::{NoneOf, OneOf, none_of, one_of};
pub use pattern::{EMAIL_PATTERN, Email, Pattern, email, pattern, try_pattern};
pub use range::{Max, Min, Range, max, min, range};
pub use required::{Required, required};
pub use string::{
    Contains, ContainsAny, ContainsPredicate, IfNotBlank, NotBlank, StrLen, StrMaxLen, StrMinLen,
    contains, contains_any, contains_lower, contains_number, contains_predicate, contains_upper,
    if_not_blank, not_blank, str_len, str_max_len, str_min_len,
};

use crate::foundation::RuleError;

/// Builds the failure for a length outside `min..=max`.
///
/// `unit` names what is counted ("characters", "items").
pub(crate) fn length_error(unit: &str, actual: usize, min: usize, max: usize) -> RuleError {
    let error = if min == max {
        RuleError::new("exact_length", format!("must have {max} {unit}"))
            .with_param("expected", max.to_string())
    } else if actual > max {
        RuleError::new("max_length", format!("must have {max} {unit} at most"))
            .with_param("max", max.to_string())
    } else {
        RuleError::new("min_length", format!("must have {min} {unit} at least"))
            .with_param("min", min.to_string())
    };
    error.with_param("actual", actual.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 8, 24, "must have 8 characters at least")]
    #[case(30, 8, 24, "must have 24 characters at most")]
    #[case(3, 2, 2, "must have 2 characters")]
    fn test_length_error_wording(
        #[case] actual: usize,
        #[case] min: usize,
        #[case] max: usize,
        #[case] expected: &str,
    ) {
        let error = length_error("characters", actual, min, max);
        assert_eq!(error.message, expected);
        assert_eq!(error.param("actual"), Some(actual.to_string().as_str()));
    }
}
