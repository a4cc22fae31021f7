//! Transaction payloads returned by the gateway.
//!
//! The gateway answers every successful operation with a `transaction`
//! object. Its shape varies with the operation and the shop's setup, so
//! every field here is defaulted when missing, and `null` string fields
//! decode as empty strings.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::amount::{Amount, Currency};
use crate::billing::BillingAddress;
use crate::customer::Customer;

/// Final status of a transaction.
///
/// The SDK only classifies the status reported by the gateway; all values
/// are terminal from the caller's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// The operation went through.
    Successful,
    /// The operation was declined or errored.
    Failed,
    /// The operation awaits customer action, usually 3-D Secure.
    Incomplete,
    /// A payment was not completed before its `expired_at`.
    Expired,
    /// A status this SDK does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Kind of operation a transaction represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// A hold on funds.
    Authorization,
    /// An authorize-and-capture.
    Payment,
    /// Settlement of an authorization.
    Capture,
    /// Cancellation of an authorization.
    Void,
    /// Return of captured funds.
    Refund,
    /// Funds sent to a card.
    Credit,
    /// Funds transferred from the shop to a recipient card.
    Payout,
    /// Registration of a card for later token charges.
    Tokenization,
    /// A type this SDK does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Masked card data echoed back by the gateway.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSummary {
    /// Card scheme, e.g. `visa`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub brand: String,
    /// Card product, e.g. `Gold`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub product: String,
    /// Co-brand name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub sub_brand: String,
    /// Stable fingerprint of the card number.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub stamp: String,
    /// Last four digits.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_4: String,
    /// First digit.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_1: String,
    /// Token usable with [`CreditCard::with_token`](crate::card::CreditCard::with_token).
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token: String,
    /// Issuer of the token, if not the gateway.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token_provider: String,
    /// Cardholder name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub holder: String,
    /// Expiry month.
    pub exp_month: Option<u32>,
    /// Expiry year.
    pub exp_year: Option<u32>,
}

/// Acquirer response attached to authorizations and payments.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationDetails {
    /// Authorization code from the issuer.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub auth_code: String,
    /// Bank response code.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_code: String,
    /// Retrieval reference number.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub rrn: String,
    /// Acquirer reference id.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ref_id: String,
    /// Acquirer message.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
    /// Acquirer gateway id.
    pub gateway_id: Option<i64>,
    /// Descriptor shown on the customer's statement.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub billing_descriptor: String,
    /// Acquirer-side status.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
}

/// A transaction as reported by the gateway.
///
/// ```rust
/// use bepaid::transaction::Transaction;
///
/// let tx: Transaction = serde_json::from_str(
///     r#"{"uid":"2-52671c8733","status":"successful","type":"authorization","amount":90}"#,
/// ).unwrap();
/// assert!(tx.is_successful());
/// assert!(tx.is_authorization());
/// assert_eq!(tx.amount.minor_units(), 90);
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Gateway-assigned id. Pass it as `parent_uid` to capture, void or refund.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub uid: String,
    /// Final status.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: TransactionStatus,
    /// Amount in minor units.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub amount: Amount,
    /// ISO-4217 currency code.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub currency: Currency,
    /// Human-readable outcome.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
    /// Order description from the request.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    /// Operation kind.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: TransactionType,
    /// Merchant-side order id from the request.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tracking_id: String,
    /// Acquirer reference id.
    pub ref_id: Option<String>,
    /// Acquirer gateway id.
    pub gateway_id: Option<i64>,
    /// Acquirer message for this transaction.
    pub message_transaction: Option<String>,
    /// `uid` of the transaction this one settles, cancels or refunds.
    pub parent_uid: Option<String>,
    /// Link to the customer receipt.
    pub receipt_url: Option<String>,
    /// `true` for test transactions.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub test: bool,
    /// Notification language code.
    pub language: Option<String>,
    /// Payment method, e.g. `credit_card`.
    pub payment_method_type: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update time.
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Masked card data.
    pub credit_card: Option<CardSummary>,
    /// Customer data from the request.
    pub customer: Option<Customer>,
    /// Billing address from the request.
    pub billing_address: Option<BillingAddress>,
    /// Acquirer response.
    pub authorization: Option<AuthorizationDetails>,
    /// Result of the fraud screening, kept as raw JSON.
    pub be_protected_verification: Option<Value>,
    /// Result of AVS and CVC checks, kept as raw JSON.
    pub avs_cvc_verification: Option<Value>,
    /// Additional payment data, kept as raw JSON.
    pub additional_data: Option<Value>,
}

impl Transaction {
    /// Returns `true` if the status is `successful`.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == TransactionStatus::Successful
    }

    /// Returns `true` if the status is `failed`.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == TransactionStatus::Failed
    }

    /// Returns `true` if the status is `incomplete`.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.status == TransactionStatus::Incomplete
    }

    /// Returns `true` if the status is `expired`.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.status == TransactionStatus::Expired
    }

    /// Returns `true` if this is an authorization.
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        self.kind == TransactionType::Authorization
    }

    /// Returns `true` if this is a payment.
    #[must_use]
    pub fn is_payment(&self) -> bool {
        self.kind == TransactionType::Payment
    }

    /// Returns `true` if this is a capture.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.kind == TransactionType::Capture
    }

    /// Returns `true` if this is a void.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.kind == TransactionType::Void
    }

    /// Returns `true` if this is a refund.
    #[must_use]
    pub fn is_refund(&self) -> bool {
        self.kind == TransactionType::Refund
    }

    /// Returns `true` if this is a credit.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.kind == TransactionType::Credit
    }

    /// Returns `true` if this is a payout.
    #[must_use]
    pub fn is_payout(&self) -> bool {
        self.kind == TransactionType::Payout
    }

    /// Returns `true` if this is a card tokenization.
    #[must_use]
    pub fn is_tokenization(&self) -> bool {
        self.kind == TransactionType::Tokenization
    }

    /// Picks the most recent transaction from a tracking-id lookup.
    ///
    /// Several transactions can share a tracking id. The one with the
    /// greatest `created_at` wins; on ties, or when timestamps are missing,
    /// the later element in the slice wins.
    #[must_use]
    pub fn latest(transactions: &[Self]) -> Option<&Self> {
        transactions.iter().max_by_key(|tx| tx.created_at)
    }
}
