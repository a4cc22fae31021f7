//! Local validation errors.
//!
//! These are produced by the `validate()` methods on request and card types.
//! Validation is advisory: nothing in this crate or in `bepaid-http` runs it
//! before a request is sent. The gateway performs its own authoritative
//! checks and reports them as a [`GatewayError`](crate::reply::GatewayError).

use std::fmt;

/// A length constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// No more than the given number of characters.
    AtMost(usize),
    /// Between the two bounds, both inclusive.
    Between(usize, usize),
    /// Exactly the given number of characters.
    Exactly(usize),
    /// Either of the two lengths.
    Either(usize, usize),
}

impl LengthRule {
    /// Returns `true` if `len` satisfies the rule.
    #[must_use]
    pub const fn allows(self, len: usize) -> bool {
        match self {
            Self::AtMost(max) => len <= max,
            Self::Between(min, max) => min <= len && len <= max,
            Self::Exactly(n) => len == n,
            Self::Either(a, b) => len == a || len == b,
        }
    }

    /// Checks `value` against the rule, counting characters rather than bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming `field` if the length is not allowed.
    pub fn check(self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let actual = value.chars().count();
        if self.allows(actual) {
            Ok(())
        } else {
            Err(ValidationError {
                field,
                rule: self,
                actual,
            })
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMost(max) => write!(f, "at most {max}"),
            Self::Between(min, max) => write!(f, "between {min} and {max}"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::Either(a, b) => write!(f, "{a} or {b}"),
        }
    }
}

/// A field failed a local length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: length is {actual}, expected {rule}")]
pub struct ValidationError {
    /// Wire name of the offending field (e.g. `tracking_id`).
    pub field: &'static str,
    /// The rule that was violated.
    pub rule: LengthRule,
    /// Observed length in characters.
    pub actual: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_boundary() {
        let rule = LengthRule::AtMost(3);
        assert!(rule.check("f", "abc").is_ok());
        let err = rule.check("f", "abcd").unwrap_err();
        assert_eq!(err.actual, 4);
        assert_eq!(err.to_string(), "invalid f: length is 4, expected at most 3");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Cyrillic letters are two bytes each in UTF-8.
        assert!(LengthRule::AtMost(5).check("description", "Заказ").is_ok());
    }

    #[test]
    fn test_between_and_either() {
        assert!(!LengthRule::Between(12, 19).allows(11));
        assert!(LengthRule::Between(12, 19).allows(12));
        assert!(LengthRule::Between(12, 19).allows(19));
        assert!(!LengthRule::Between(12, 19).allows(20));
        assert!(LengthRule::Either(3, 4).allows(3));
        assert!(LengthRule::Either(3, 4).allows(4));
        assert!(!LengthRule::Either(3, 4).allows(5));
        assert_eq!(LengthRule::Either(3, 4).to_string(), "3 or 4");
    }

    #[test]
    fn test_validation_error_is_copy() {
        let err = LengthRule::Exactly(2).check("exp_month", "1").unwrap_err();
        let copied = err;
        assert_eq!(copied, err);
        assert_eq!(err.rule, LengthRule::Exactly(2));
    }
}
