//! Regular-expression rules

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::RuleError;

/// Source of the regex behind [`email`].
///
/// `\w` is ASCII-only here, so internationalised addresses are rejected.
pub const EMAIL_PATTERN: &str = r"(?-u)^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

// ============================================================================
// PATTERN
// ============================================================================

crate::constraint! {
    /// Whole-value match against a compiled regex.
    ///
    /// The regex is used as written; anchor it with `^...$` to match the
    /// entire value.
    pub Pattern { regex: Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) {
        RuleError::new("pattern", format!("value does not match regex {}", self.regex.as_str()))
            .with_param("pattern", self.regex.as_str().to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { regex: Regex::new(pattern)? })
    }
    fn try_pattern(pattern: &str) -> regex::Error;
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

/// A rule over an already compiled regex.
#[must_use]
pub fn pattern(regex: &Regex) -> Pattern {
    Pattern::from(regex.clone())
}

// ============================================================================
// EMAIL
// ============================================================================

crate::constraint! {
    /// Matches [`EMAIL_PATTERN`].
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { RuleError::new("email", "invalid email") }
    fn email();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;
    use rstest::rstest;

    #[rstest]
    #[case("test@test.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("user-name@example.co", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@example.c", false)]
    #[case("üser@example.com", false)]
    fn test_email(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(email().check(input).is_ok(), valid);
    }

    #[test]
    fn test_email_message() {
        assert_eq!(email().check("nope").unwrap_err().to_string(), "invalid email");
    }

    #[test]
    fn test_try_pattern() {
        let phone = try_pattern(r"^\d{3}-\d{4}$").unwrap();
        assert!(phone.check("123-4567").is_ok());
        assert_eq!(
            phone.check("invalid").unwrap_err().to_string(),
            r"value does not match regex ^\d{3}-\d{4}$"
        );
        assert!(try_pattern("(").is_err());
    }

    #[test]
    fn test_pattern_from_compiled() {
        let regex = Regex::new("^[a-z]+$").unwrap();
        assert!(pattern(&regex).check("abc").is_ok());
        assert!(pattern(&regex).check("ABC").is_err());
    }
}
