use serde::Serialize;
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::{Amount, Currency};
use crate::billing::BillingAddress;
use crate::card::CreditCard;
use crate::error::{LengthRule, ValidationError};

/// Transfers funds from the shop to a recipient's card.
///
/// Whether the sender and recipient addresses are required depends on the
/// acquiring bank; the gateway rejects the request if they are missing.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayoutRequest {
    /// Amount in minor units.
    pub amount: Amount,
    /// ISO-4217 currency code.
    pub currency: Currency,
    /// Order description, at most 255 characters.
    pub description: String,
    /// Merchant-side order id, at most 255 characters.
    pub tracking_id: String,
    /// Address of the recipient.
    pub recipient_billing_address: Option<BillingAddress>,
    /// Address of the sender.
    pub sender_billing_address: Option<BillingAddress>,
    /// The card receiving the funds.
    pub recipient_credit_card: CreditCard,
    /// Free-form data passed through to the gateway.
    pub additional_data: Option<Map<String, Value>>,
}

impl PayoutRequest {
    /// Creates a request from its mandatory fields.
    pub fn new(
        amount: i64,
        currency: impl Into<Currency>,
        description: impl Into<String>,
        tracking_id: impl Into<String>,
        recipient_credit_card: CreditCard,
    ) -> Self {
        Self {
            amount: Amount::new(amount),
            currency: currency.into(),
            description: description.into(),
            tracking_id: tracking_id.into(),
            recipient_credit_card,
            ..Self::default()
        }
    }

    /// Sets `recipient_billing_address`.
    #[must_use]
    pub fn with_recipient_billing_address(mut self, address: BillingAddress) -> Self {
        self.recipient_billing_address = Some(address);
        self
    }

    /// Sets `sender_billing_address`.
    #[must_use]
    pub fn with_sender_billing_address(mut self, address: BillingAddress) -> Self {
        self.sender_billing_address = Some(address);
        self
    }

    /// Sets `additional_data`, replacing any previous value.
    #[must_use]
    pub fn with_additional_data(mut self, additional_data: Map<String, Value>) -> Self {
        self.additional_data = Some(additional_data);
        self
    }

    /// Checks `description` and `tracking_id` against the gateway's length limits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first field over 255 characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        LengthRule::AtMost(255).check("description", &self.description)?;
        LengthRule::AtMost(255).check("tracking_id", &self.tracking_id)
    }
}

impl GatewayRequest for PayoutRequest {
    const OPERATION: Operation = Operation::Payout;
}
