//! Customer data used by the gateway's fraud checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

/// The paying customer.
///
/// None of the fields are checked locally. Whether `ip` and `email` are
/// required depends on the fraud rules configured for the shop.
///
/// # Serialization
///
/// `ip`, `email` and `device_id` are always emitted; `birth_date` only when
/// set, as `YYYY-MM-DD`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Customer IP address.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ip: String,
    /// Customer email.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: String,
    /// Device fingerprint, if the shop collects one.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub device_id: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
}

impl Customer {
    /// Creates a customer with an IP address and email.
    pub fn new(ip: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Sets the device fingerprint.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = device_id.into();
        self
    }

    /// Sets the date of birth.
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }
}
