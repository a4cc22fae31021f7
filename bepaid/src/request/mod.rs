//! Request value objects and the `{"request": ...}` envelope.
//!
//! Each operation has its own struct whose fields are declared in wire
//! order. Mandatory fields are always emitted, including zero values; every
//! `Option` field is omitted when `None`. Requests are built with `new(...)`
//! and refined with consuming `with_*` calls:
//!
//! ```rust
//! use bepaid::request::{CaptureRequest, GatewayRequest};
//!
//! let capture = CaptureRequest::new("1-310b0da80b", 63).with_duplicate_check(false);
//! assert_eq!(
//!     capture.to_json().unwrap(),
//!     r#"{"request":{"parent_uid":"1-310b0da80b","amount":63,"duplicate_check":false}}"#
//! );
//! ```

mod authorization;
mod balance;
mod capture;
mod credit;
mod payment;
mod payout;
mod refund;
mod tokenization;
mod void;

pub use authorization::AuthorizationRequest;
pub use balance::BalanceRequest;
pub use capture::CaptureRequest;
pub use credit::CreditRequest;
pub use payment::PaymentRequest;
pub use payout::PayoutRequest;
pub use refund::RefundRequest;
pub use tokenization::TokenizationRequest;
pub use void::VoidRequest;

use serde::Serialize;
use std::fmt;

/// Gateway operations that take a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Place a hold on funds.
    Authorization,
    /// Authorize and capture in one step.
    Payment,
    /// Settle an earlier authorization.
    Capture,
    /// Cancel an authorization before capture.
    Void,
    /// Return captured funds.
    Refund,
    /// Send funds to a card.
    Credit,
    /// Transfer funds from the shop to a recipient card.
    Payout,
    /// Register a card and obtain a reusable token.
    Tokenization,
    /// Query a shop account balance.
    Balance,
}

impl Operation {
    /// Path segment appended to the gateway base URL.
    ///
    /// Card operations use the plural collection name; the account query
    /// uses `balance`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Authorization => "authorizations",
            Self::Payment => "payments",
            Self::Capture => "captures",
            Self::Void => "voids",
            Self::Refund => "refunds",
            Self::Credit => "credits",
            Self::Payout => "payouts",
            Self::Tokenization => "tokenizations",
            Self::Balance => "balance",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The `{"request": ...}` wrapper every request body is sent in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Envelope<'a, T> {
    /// The wrapped request.
    pub request: &'a T,
}

/// A request that can be sent to one of the gateway's operation endpoints.
pub trait GatewayRequest: Serialize + Sized {
    /// The operation this request is sent to.
    const OPERATION: Operation;

    /// Wraps the request in its wire envelope.
    fn envelope(&self) -> Envelope<'_, Self> {
        Envelope { request: self }
    }

    /// Serializes the enveloped request to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if a free-form `additional_data` value
    /// cannot be serialized.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.envelope())
    }
}
