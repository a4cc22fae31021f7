use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::Amount;
use crate::error::{LengthRule, ValidationError};

/// Returns funds from a captured payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefundRequest {
    /// `uid` of the payment or capture being refunded.
    pub parent_uid: String,
    /// Amount to refund in minor units.
    pub amount: Amount,
    /// Reason shown to the customer, at most 255 characters.
    pub reason: String,
    /// Reject the request if an identical one was recently processed.
    pub duplicate_check: Option<bool>,
}

impl RefundRequest {
    /// Creates a refund of `amount` against `parent_uid`.
    pub fn new(parent_uid: impl Into<String>, amount: i64, reason: impl Into<String>) -> Self {
        Self {
            parent_uid: parent_uid.into(),
            amount: Amount::new(amount),
            reason: reason.into(),
            duplicate_check: None,
        }
    }

    /// Sets `duplicate_check`.
    #[must_use]
    pub const fn with_duplicate_check(mut self, duplicate_check: bool) -> Self {
        self.duplicate_check = Some(duplicate_check);
        self
    }

    /// Checks `reason` against the gateway's length limit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `reason` is over 255 characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        LengthRule::AtMost(255).check("reason", &self.reason)
    }
}

impl GatewayRequest for RefundRequest {
    const OPERATION: Operation = Operation::Refund;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serialization() {
        assert_eq!(
            RefundRequest::default().to_json().unwrap(),
            r#"{"request":{"parent_uid":"","amount":0,"reason":""}}"#
        );
    }

    #[test]
    fn test_minimal_serialization() {
        assert_eq!(
            RefundRequest::new("id123", 63, "reason").to_json().unwrap(),
            r#"{"request":{"parent_uid":"id123","amount":63,"reason":"reason"}}"#
        );
    }

    #[test]
    fn test_duplicate_check_presence() {
        assert_eq!(
            RefundRequest::new("id123", 63, "reason")
                .with_duplicate_check(false)
                .to_json()
                .unwrap(),
            r#"{"request":{"parent_uid":"id123","amount":63,"reason":"reason","duplicate_check":false}}"#
        );
    }

    #[test]
    fn test_validate_reason_length() {
        assert!(RefundRequest::new("id", 1, "r".repeat(255)).validate().is_ok());
        let err = RefundRequest::new("id", 1, "r".repeat(256))
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "reason");
    }
}
