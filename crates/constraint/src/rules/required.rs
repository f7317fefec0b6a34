//! Presence rule

use crate::foundation::RuleError;

crate::constraint! {
    /// Rejects `None`.
    ///
    /// Pair with [`optional`](crate::combinators::optional) when a present
    /// value must also satisfy other rules:
    ///
    /// ```rust,ignore
    /// let status = first![required::<i32>(), optional(range(0, 20))];
    /// ```
    pub Required<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) { RuleError::new("required", "is required") }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::foundation::Constraint;
    use crate::rules::range;

    #[test]
    fn test_required() {
        let rule = required::<String>();
        assert!(rule.check(&Some("test".to_string())).is_ok());
        assert_eq!(rule.check(&None).unwrap_err().to_string(), "is required");
    }

    #[test]
    fn test_required_then_optional() {
        let status = crate::first![required::<i32>(), optional(range(0, 20))];
        assert!(status.check(&Some(20)).is_ok());
        assert_eq!(status.check(&None).unwrap_err().to_string(), "is required");
        assert_eq!(
            status.check(&Some(21)).unwrap_err().to_string(),
            "is greater than maximum 20"
        );
    }
}
