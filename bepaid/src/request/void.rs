use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::Amount;

/// Cancels an authorization that has not been captured yet.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoidRequest {
    /// `uid` of the authorization being voided.
    pub parent_uid: String,
    /// Amount to release in minor units.
    pub amount: Amount,
    /// Reject the request if an identical one was recently processed.
    pub duplicate_check: Option<bool>,
}

impl VoidRequest {
    /// Creates a void of `amount` against the authorization `parent_uid`.
    pub fn new(parent_uid: impl Into<String>, amount: i64) -> Self {
        Self {
            parent_uid: parent_uid.into(),
            amount: Amount::new(amount),
            duplicate_check: None,
        }
    }

    /// Sets `duplicate_check`.
    #[must_use]
    pub const fn with_duplicate_check(mut self, duplicate_check: bool) -> Self {
        self.duplicate_check = Some(duplicate_check);
        self
    }
}

impl GatewayRequest for VoidRequest {
    const OPERATION: Operation = Operation::Void;
}
