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

/// Places a hold on the customer's funds without settling them.
///
/// The hold is later settled with a [`CaptureRequest`](super::CaptureRequest)
/// or released with a [`VoidRequest`](super::VoidRequest).
///
/// # Serialization
///
/// ```json
/// {"request":{"amount":1,"currency":"RUB","description":"rub_1","tracking_id":"id1",
///   "duplicate_check":false,"return_url":"...","test":true,"credit_card":{...},
///   "additional_data":{...},"customer":{...},"billing_address":{...},"language":"ru"}}
/// ```
///
/// Keys marked optional by their `Option` type are omitted when unset.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizationRequest {
    /// Amount in minor units.
    pub amount: Amount,
    /// ISO-4217 currency code.
    pub currency: Currency,
    /// Order description, at most 255 characters.
    pub description: String,
    /// Merchant-side order id, at most 255 characters.
    pub tracking_id: String,
    /// Reject the request if an identical one was recently processed.
    /// The gateway defaults this to `true`.
    pub duplicate_check: Option<bool>,
    /// Where the customer returns after 3-D Secure. Required when 3-D Secure
    /// is enabled for the shop.
    pub return_url: Option<String>,
    /// Marks the transaction as a test.
    pub test: bool,
    /// The card to charge.
    pub credit_card: CreditCard,
    /// Free-form data passed through to the gateway (receipt text,
    /// `contract` flags for tokenization and so on).
    pub additional_data: Option<Map<String, Value>>,
    /// Customer data for fraud checks.
    pub customer: Option<Customer>,
    /// Billing address of the cardholder.
    pub billing_address: Option<BillingAddress>,
    /// Language of customer notifications.
    pub language: Option<Language>,
}

impl AuthorizationRequest {
    /// Creates a request from its mandatory fields.
    pub fn new(
        amount: i64,
        currency: impl Into<Currency>,
        description: impl Into<String>,
        tracking_id: impl Into<String>,
        test: bool,
        credit_card: CreditCard,
    ) -> Self {
        Self {
            amount: Amount::new(amount),
            currency: currency.into(),
            description: description.into(),
            tracking_id: tracking_id.into(),
            test,
            credit_card,
            ..Self::default()
        }
    }

    /// Sets `duplicate_check`.
    #[must_use]
    pub const fn with_duplicate_check(mut self, duplicate_check: bool) -> Self {
        self.duplicate_check = Some(duplicate_check);
        self
    }

    /// Sets `return_url`.
    #[must_use]
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Sets `additional_data`, replacing any previous value.
    #[must_use]
    pub fn with_additional_data(mut self, additional_data: Map<String, Value>) -> Self {
        self.additional_data = Some(additional_data);
        self
    }

    /// Sets `customer`.
    #[must_use]
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Sets `billing_address`.
    #[must_use]
    pub fn with_billing_address(mut self, billing_address: BillingAddress) -> Self {
        self.billing_address = Some(billing_address);
        self
    }

    /// Sets `language`.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Checks `description` and `tracking_id` against the gateway's length limits.
    ///
    /// The card is not checked; call [`CreditCard::validate`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first field over 255 characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        LengthRule::AtMost(255).check("description", &self.description)?;
        LengthRule::AtMost(255).check("tracking_id", &self.tracking_id)
    }
}

impl GatewayRequest for AuthorizationRequest {
    const OPERATION: Operation = Operation::Authorization;
}
