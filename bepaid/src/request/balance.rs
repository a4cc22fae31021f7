use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{GatewayRequest, Operation};
use crate::amount::Currency;

/// Queries the balance of a shop account.
///
/// Every field is optional; an empty request asks for the default account.
/// The answer is a [`BalanceReply`](crate::balance::BalanceReply), not a
/// transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceRequest {
    /// Account number.
    pub account: Option<String>,
    /// ISO-4217 currency code.
    pub currency: Option<Currency>,
    /// Id of the acquiring bank gateway.
    pub gateway_id: Option<String>,
}

impl BalanceRequest {
    /// Creates a request for the default account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `account`.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets `currency`.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<Currency>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets `gateway_id`.
    #[must_use]
    pub fn with_gateway_id(mut self, gateway_id: impl Into<String>) -> Self {
        self.gateway_id = Some(gateway_id.into());
        self
    }
}

impl GatewayRequest for BalanceRequest {
    const OPERATION: Operation = Operation::Balance;
}
