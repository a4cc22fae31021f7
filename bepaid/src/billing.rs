//! Billing address of the cardholder.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

/// A billing address.
///
/// The gateway enforces these limits itself; they are not checked locally:
///
/// | field        | constraint                                        |
/// |--------------|---------------------------------------------------|
/// | `first_name` | at most 30 characters                             |
/// | `last_name`  | at most 30 characters                             |
/// | `country`    | ISO 3166-1 alpha-2                                |
/// | `city`       | at most 60 characters                             |
/// | `state`      | two letters, required when `country` is US or CA  |
/// | `zip`        | `NNNNN` or `NNNNN-NNNN` for US addresses          |
/// | `address`    | at most 255 characters                            |
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    /// First name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_name: String,
    /// Last name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_name: String,
    /// Two-letter country code.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
    /// City.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub city: String,
    /// Two-letter state code.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub state: String,
    /// Postal code.
    pub zip: Option<String>,
    /// Street address.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl BillingAddress {
    /// Creates an address from its always-present fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            country: country.into(),
            city: city.into(),
            state: state.into(),
            zip: None,
            address: address.into(),
            phone: None,
        }
    }

    /// Sets the postal code.
    #[must_use]
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let address = BillingAddress::new("John", "Doe", "US", "Denver", "CO", "1st Street");
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#"{"first_name":"John","last_name":"Doe","country":"US","city":"Denver","state":"CO","address":"1st Street"}"#
        );
    }

    #[test]
    fn test_optional_fields_emitted_in_order() {
        let address = BillingAddress::new("John", "Doe", "US", "Denver", "CO", "1st Street")
            .with_zip("96002")
            .with_phone("+1 555 0100");
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#"{"first_name":"John","last_name":"Doe","country":"US","city":"Denver","state":"CO","zip":"96002","address":"1st Street","phone":"+1 555 0100"}"#
        );
    }

    #[test]
    fn test_echoed_address_with_nulls() {
        let json = r#"{
            "first_name": "John",
            "last_name": "Doe",
            "address": "1st Street",
            "country": "US",
            "city": "Denver",
            "zip": "96002",
            "state": null,
            "phone": null
        }"#;
        let address: BillingAddress = serde_json::from_str(json).unwrap();
        assert_eq!(address.zip.as_deref(), Some("96002"));
        assert!(address.state.is_empty());
        assert!(address.phone.is_none());
    }
}
