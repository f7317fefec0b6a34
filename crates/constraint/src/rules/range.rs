//! Ordered-value bounds
//!
//! Works for anything `PartialOrd + Display + Copy`: integers, floats,
//! chars, and caller types such as enum-like newtypes.

use std::fmt::Display;

use crate::foundation::RuleError;

fn above_max<T: Display>(max: T) -> RuleError {
    RuleError::new("max", format!("is greater than maximum {max}")).with_param("max", max.to_string())
}

fn below_min<T: Display>(min: T) -> RuleError {
    RuleError::new("min", format!("is less than minimum {min}")).with_param("min", min.to_string())
}

crate::constraint! {
    /// Value within `min..=max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Range<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        if *input > self.max { above_max(self.max) } else { below_min(self.min) }
    }
    new(min: T, max: T) {
        assert!(min <= max, "range: min ({min}) must not exceed max ({max})");
        Self { min, max }
    }
    fn range(min: T, max: T);
}

crate::constraint! {
    /// Value of at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) { below_min(self.min) }
    fn min(min: T);
}

crate::constraint! {
    /// Value of at most `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) { above_max(self.max) }
    fn max(max: T);
}
