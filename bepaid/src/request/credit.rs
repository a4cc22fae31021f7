use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::{Amount, Currency};
use crate::card::CreditCard;
use crate::error::{LengthRule, ValidationError};
use crate::language::Language;

/// Sends funds to a card, e.g. a winnings or cashback payout to a customer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreditRequest {
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
    /// The card to credit.
    pub credit_card: CreditCard,
}

impl CreditRequest {
    /// Creates a request from its mandatory fields.
    pub fn new(
        amount: i64,
        currency: impl Into<Currency>,
        description: impl Into<String>,
        tracking_id: impl Into<String>,
        credit_card: CreditCard,
    ) -> Self {
        Self {
            amount: Amount::new(amount),
            currency: currency.into(),
            description: description.into(),
            tracking_id: tracking_id.into(),
            language: None,
            credit_card,
        }
    }

    /// Sets `language`.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
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

impl GatewayRequest for CreditRequest {
    const OPERATION: Operation = Operation::Credit;
}
