//! Shop account balance returned for a [`BalanceRequest`](crate::request::BalanceRequest).
//!
//! Unlike the transaction endpoints, the balance answer uses camelCase keys
//! for the account and PascalCase keys for the bank statement:
//!
//! ```json
//! {"status": "successful",
//!  "result": {"gatewayId": 4521, "account": "BY00...", "amount": 150000, "currency": "BYN",
//!             "bankInfo": {"Account": "BY00...", "Amount": 1500.0,
//!                          "Balance": {"OperDate": "2024-05-01", "Credit": 10.5, ...}}}}
//! ```

use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Currency};
use crate::reply::GatewayError;

/// Body of a balance response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceReply {
    /// `successful` when the balance was read.
    pub status: String,
    /// The balance, when `status` is `successful`.
    pub result: Option<Balance>,
    /// The rejection, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<GatewayError>,
}

impl BalanceReply {
    /// Returns `true` if the gateway reports the balance as read.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == "successful"
    }

    /// Returns the reply, or the gateway's rejection if `response.message`
    /// is non-empty.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] if `response.message` is non-empty.
    pub fn into_result(self) -> Result<Self, GatewayError> {
        match self.response {
            Some(error) if !error.message.is_empty() => Err(error),
            _ => Ok(self),
        }
    }
}

/// Balance of one shop account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Balance {
    /// Acquiring bank gateway id.
    pub gateway_id: i64,
    /// Account number.
    pub account: String,
    /// Available amount in minor units.
    pub amount: Amount,
    /// ISO-4217 currency code.
    pub currency: Currency,
    /// Statement reported by the bank.
    pub bank_info: Option<BankInfo>,
}

/// Bank-side view of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BankInfo {
    /// Account number at the bank.
    pub account: String,
    /// Amount in major units.
    pub amount: f64,
    /// Turnover for the operation day.
    pub balance: Option<BankBalance>,
}

/// Daily turnover, in major units of the account currency and in roubles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BankBalance {
    /// Operation day.
    pub oper_date: String,
    /// Credited.
    pub credit: f64,
    /// Credited, in roubles.
    pub credit_rub: f64,
    /// Debited.
    pub debit: f64,
    /// Debited, in roubles.
    pub debit_rub: f64,
    /// Opening balance.
    pub amount_in: f64,
    /// Opening balance, in roubles.
    pub amount_in_rub: f64,
    /// Closing balance.
    pub amount_out: f64,
    /// Closing balance, in roubles.
    pub amount_out_rub: f64,
}
