//! Monetary amounts and currency codes.
//!
//! The gateway takes amounts in the currency's minor units (cents, kopecks)
//! as a plain JSON integer: `$32.45` is sent as `3245`. Currency is an
//! ISO-4217 code such as `"USD"`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// An amount in minor currency units.
///
/// The sign is not checked locally; the gateway rejects invalid amounts
/// itself and reports them in the error tree under `amount`.
///
/// # Serialization
///
/// Serialized as a bare integer: `3245`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from a raw minor-unit value.
    #[must_use]
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the raw minor-unit value.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ISO-4217 currency code.
///
/// Common codes are available as associated constants. Any other code can
/// be built with [`Currency::new`]; the value is passed to the gateway as-is.
///
/// ```rust
/// use bepaid::amount::Currency;
///
/// assert_eq!(Currency::BYN.as_str(), "BYN");
/// assert_eq!(Currency::new("GBP").as_str(), "GBP");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    /// Belarusian ruble.
    pub const BYN: Self = Self(Cow::Borrowed("BYN"));
    /// Russian ruble.
    pub const RUB: Self = Self(Cow::Borrowed("RUB"));
    /// US dollar.
    pub const USD: Self = Self(Cow::Borrowed("USD"));
    /// Euro.
    pub const EUR: Self = Self(Cow::Borrowed("EUR"));

    /// Creates a currency from an arbitrary code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Currency {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Amount::new(3245)).unwrap(), "3245");
        let amount: Amount = serde_json::from_str("90").unwrap();
        assert_eq!(amount.minor_units(), 90);
    }

    #[test]
    fn test_currency_serializes_as_string() {
        assert_eq!(serde_json::to_string(&Currency::RUB).unwrap(), "\"RUB\"");
        assert_eq!(serde_json::to_string(&Currency::default()).unwrap(), "\"\"");
        let currency: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(currency, Currency::USD);
    }
}
