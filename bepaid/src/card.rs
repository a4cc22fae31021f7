//! Credit card details embedded in authorization and payment requests.
//!
//! A card is sent either with its full details (number, verification value,
//! holder, expiry) or as a token the gateway returned from an earlier
//! payment. [`CardDetails`] keeps the two forms apart; both share the
//! `skip_three_d_secure_verification` flag.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{LengthRule, ValidationError};

/// The two ways of identifying a card to the gateway.
#[derive(Clone, PartialEq, Eq)]
pub enum CardDetails {
    /// Full card data.
    Explicit {
        /// Card number, 12 to 19 digits.
        number: String,
        /// CVC2/CVV2/CID, 3 or 4 digits.
        verification_value: String,
        /// Cardholder name, at most 32 characters.
        holder: String,
        /// Expiry month as two digits, e.g. `01`.
        exp_month: String,
        /// Expiry year as four digits, e.g. `2027`.
        exp_year: String,
    },
    /// A card token obtained from a previous transaction.
    ///
    /// When paying with a token the gateway also expects
    /// `additional_data.contract` on the request.
    Token {
        /// The card token.
        token: String,
    },
}

impl Default for CardDetails {
    fn default() -> Self {
        Self::Explicit {
            number: String::new(),
            verification_value: String::new(),
            holder: String::new(),
            exp_month: String::new(),
            exp_year: String::new(),
        }
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit {
                number,
                holder,
                exp_month,
                exp_year,
                ..
            } => f
                .debug_struct("Explicit")
                .field("number", &mask_number(number))
                .field("verification_value", &"***")
                .field("holder", holder)
                .field("exp_month", exp_month)
                .field("exp_year", exp_year)
                .finish(),
            Self::Token { .. } => f
                .debug_struct("Token")
                .field("token", &"***")
                .finish(),
        }
    }
}

/// Keeps the last four digits of a card number.
fn mask_number(number: &str) -> String {
    let len = number.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = number.chars().skip(len - 4).collect();
    format!("{}{tail}", "*".repeat(len - 4))
}

/// A credit card as sent in the `credit_card` object of a request.
///
/// # Serialization
///
/// Keys are always emitted in the order `number`, `verification_value`,
/// `holder`, `exp_month`, `exp_year`, `token`,
/// `skip_three_d_secure_verification`. A tokenized card emits the five
/// explicit keys as empty strings; `token` is only present when non-empty.
///
/// ```rust
/// use bepaid::card::CreditCard;
///
/// let card = CreditCard::with_token("tok_1");
/// assert_eq!(
///     serde_json::to_string(&card).unwrap(),
///     r#"{"number":"","verification_value":"","holder":"","exp_month":"","exp_year":"","token":"tok_1","skip_three_d_secure_verification":false}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditCard {
    /// Explicit card data or a token.
    pub details: CardDetails,
    /// Asks the gateway to skip 3-D Secure. Check with support before using it.
    pub skip_three_d_secure_verification: bool,
}

impl CreditCard {
    /// Creates a card from its explicit details.
    pub fn new(
        number: impl Into<String>,
        verification_value: impl Into<String>,
        holder: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
    ) -> Self {
        Self {
            details: CardDetails::Explicit {
                number: number.into(),
                verification_value: verification_value.into(),
                holder: holder.into(),
                exp_month: exp_month.into(),
                exp_year: exp_year.into(),
            },
            skip_three_d_secure_verification: false,
        }
    }

    /// Creates a card from a token returned by an earlier transaction.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            details: CardDetails::Token {
                token: token.into(),
            },
            skip_three_d_secure_verification: false,
        }
    }

    /// Sets the `skip_three_d_secure_verification` flag.
    #[must_use]
    pub const fn with_skip_three_d_secure_verification(mut self, skip: bool) -> Self {
        self.skip_three_d_secure_verification = skip;
        self
    }

    /// Returns `true` if the card is identified by a token.
    #[must_use]
    pub const fn is_tokenized(&self) -> bool {
        matches!(self.details, CardDetails::Token { .. })
    }

    /// Checks the explicit card fields against the gateway's length rules.
    ///
    /// Tokenized cards always pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking `number`,
    /// `verification_value`, `holder`, `exp_month` and `exp_year` in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.details {
            CardDetails::Explicit {
                number,
                verification_value,
                holder,
                exp_month,
                exp_year,
            } => {
                LengthRule::Between(12, 19).check("number", number)?;
                LengthRule::Either(3, 4).check("verification_value", verification_value)?;
                LengthRule::AtMost(32).check("holder", holder)?;
                LengthRule::Exactly(2).check("exp_month", exp_month)?;
                LengthRule::Exactly(4).check("exp_year", exp_year)
            }
            CardDetails::Token { .. } => Ok(()),
        }
    }
}

/// Wire form of [`CreditCard`].
#[derive(Serialize)]
struct CreditCardWire<'a> {
    number: &'a str,
    verification_value: &'a str,
    holder: &'a str,
    exp_month: &'a str,
    exp_year: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    token: &'a str,
    skip_three_d_secure_verification: bool,
}

impl Serialize for CreditCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match &self.details {
            CardDetails::Explicit {
                number,
                verification_value,
                holder,
                exp_month,
                exp_year,
            } => CreditCardWire {
                number,
                verification_value,
                holder,
                exp_month,
                exp_year,
                token: "",
                skip_three_d_secure_verification: self.skip_three_d_secure_verification,
            },
            CardDetails::Token { token } => CreditCardWire {
                number: "",
                verification_value: "",
                holder: "",
                exp_month: "",
                exp_year: "",
                token,
                skip_three_d_secure_verification: self.skip_three_d_secure_verification,
            },
        };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_with_number(number: &str) -> CreditCard {
        CreditCard::new(number, "123", "John Doe", "01", "2030")
    }

    #[test]
    fn test_explicit_card_serialization() {
        let card = CreditCard::new("5555", "123", "tim", "05", "2024");
        assert_eq!(
            serde_json::to_string(&card).unwrap(),
            r#"{"number":"5555","verification_value":"123","holder":"tim","exp_month":"05","exp_year":"2024","skip_three_d_secure_verification":false}"#
        );
    }

    #[test]
    fn test_default_card_serialization() {
        assert_eq!(
            serde_json::to_string(&CreditCard::default()).unwrap(),
            r#"{"number":"","verification_value":"","holder":"","exp_month":"","exp_year":"","skip_three_d_secure_verification":false}"#
        );
    }

    #[test]
    fn test_skip_three_d_secure_flag() {
        let card = CreditCard::with_token("abc").with_skip_three_d_secure_verification(true);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.ends_with(r#""token":"abc","skip_three_d_secure_verification":true}"#));
    }

    #[test]
    fn test_empty_token_is_omitted() {
        let json = serde_json::to_string(&CreditCard::with_token("")).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_number_length_boundaries() {
        assert_eq!(
            card_with_number("12345678901").validate().unwrap_err().field,
            "number"
        );
        assert!(card_with_number("123456789012").validate().is_ok());
        assert!(card_with_number("1234567890123456789").validate().is_ok());
        assert_eq!(
            card_with_number("12345678901234567890")
                .validate()
                .unwrap_err()
                .rule,
            LengthRule::Between(12, 19)
        );
    }

    #[test]
    fn test_validation_rules_per_field() {
        let cases = [
            (CreditCard::new("4200000000000000", "12", "J", "01", "2030"), "verification_value"),
            (CreditCard::new("4200000000000000", "12345", "J", "01", "2030"), "verification_value"),
            (CreditCard::new("4200000000000000", "1234", &"x".repeat(33), "01", "2030"), "holder"),
            (CreditCard::new("4200000000000000", "123", "J", "1", "2030"), "exp_month"),
            (CreditCard::new("4200000000000000", "123", "J", "01", "30"), "exp_year"),
        ];
        for (card, field) in cases {
            assert_eq!(card.validate().unwrap_err().field, field);
        }
        assert!(CreditCard::new("4200000000000000", "1234", &"x".repeat(32), "12", "2030")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_token_card_bypasses_validation() {
        let card = CreditCard::with_token("t");
        assert!(card.is_tokenized());
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_card_data() {
        let debug = format!("{:?}", CreditCard::new("4200000000001234", "987", "J", "01", "2030"));
        assert!(debug.contains("************1234"));
        assert!(!debug.contains("4200000000001234"));
        assert!(!debug.contains("987"));
    }
}
