use serde::Serialize;
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::{Amount, Currency};
use crate::billing::BillingAddress;
use crate::card::CreditCard;
use crate::customer::Customer;
use crate::error::{LengthRule, ValidationError};
use crate::language::Language;

/// Registers a card with the gateway and returns a reusable card token.
///
/// The token comes back in the transaction's `credit_card.token` and can be
/// passed to [`CreditCard::with_token`] for later charges.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenizationRequest {
    /// Amount in minor units.
    pub amount: Amount,
    /// ISO-4217 currency code.
    pub currency: Currency,
    /// Order description, at most 255 characters.
    pub description: String,
    /// Merchant-side order id, at most 255 characters.
    pub tracking_id: String,
    /// Language of customer notifications.
    pub language: Option<Language>,
    /// Billing address of the cardholder.
    pub billing_address: Option<BillingAddress>,
    /// The card to tokenize.
    pub credit_card: CreditCard,
    /// Owner of the card.
    pub customer: Customer,
    /// Free-form data passed through to the gateway.
    pub additional_data: Option<Map<String, Value>>,
}

impl TokenizationRequest {
    /// Creates a request from its mandatory fields.
    pub fn new(
        amount: i64,
        currency: impl Into<Currency>,
        description: impl Into<String>,
        tracking_id: impl Into<String>,
        credit_card: CreditCard,
        customer: Customer,
    ) -> Self {
        Self {
            amount: Amount::new(amount),
            currency: currency.into(),
            description: description.into(),
            tracking_id: tracking_id.into(),
            credit_card,
            customer,
            ..Self::default()
        }
    }

    /// Sets `language`.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets `billing_address`.
    #[must_use]
    pub fn with_billing_address(mut self, billing_address: BillingAddress) -> Self {
        self.billing_address = Some(billing_address);
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

impl GatewayRequest for TokenizationRequest {
    const OPERATION: Operation = Operation::Tokenization;
}
