//! Response envelopes and structured gateway errors.
//!
//! A response body carries either a `transaction` (or a `transactions`
//! array for tracking-id lookups) or a `response` object describing why the
//! gateway rejected the request:
//!
//! ```json
//! {"response": {
//!     "message": "Amount is not a number. Number is invalid.",
//!     "errors": {
//!         "amount": ["is not a number"],
//!         "credit_card": {"number": ["is invalid"]}
//!     }
//! }}
//! ```
//!
//! The `errors` tree nests to arbitrary depth, so it is decoded into the
//! recursive [`ErrorNode`] rather than a fixed struct. Leaves that are not
//! strings (numbers, booleans, arrays of objects) are kept verbatim as
//! [`ErrorNode::Other`], so an unusual tree never hides the rejection.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};
use std::collections::BTreeMap;
use std::fmt;

use crate::transaction::Transaction;

/// One node of the gateway's field-error tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    /// Error messages for a single field.
    Messages(Vec<String>),
    /// Errors for the fields of a nested object, e.g. `credit_card`.
    Fields(FieldErrors),
    /// Any other JSON value, kept as sent.
    Other(Value),
}

impl ErrorNode {
    /// Returns the messages if this is a leaf, or an empty slice otherwise.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Messages(messages) => messages,
            Self::Fields(_) | Self::Other(_) => &[],
        }
    }
}

impl Serialize for ErrorNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Messages(messages) => messages.serialize(serializer),
            Self::Fields(fields) => fields.serialize(serializer),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

struct ErrorNodeVisitor;

impl<'de> Visitor<'de> for ErrorNodeVisitor {
    type Value = ErrorNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of messages, a message, or an object of field errors")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Other(Value::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Other(Value::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Other(Value::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Other(Value::from(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Messages(vec![value.to_owned()]))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Messages(vec![value]))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ErrorNode, E> {
        Ok(ErrorNode::Messages(Vec::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<ErrorNode, E> {
        self.visit_unit()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ErrorNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        if !items.iter().all(Value::is_string) {
            return Ok(ErrorNode::Other(Value::Array(items)));
        }
        let messages = items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(message) => Some(message),
                _ => None,
            })
            .collect();
        Ok(ErrorNode::Messages(messages))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ErrorNode, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((field, node)) = map.next_entry::<String, ErrorNode>()? {
            fields.insert(field, node);
        }
        Ok(ErrorNode::Fields(FieldErrors(fields)))
    }
}

impl<'de> Deserialize<'de> for ErrorNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ErrorNodeVisitor)
    }
}

/// Field name to [`ErrorNode`], ordered by field name.
///
/// `null` decodes as an empty tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, ErrorNode>);

impl FieldErrors {
    /// Looks up a node by dotted path, e.g. `credit_card.number`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ErrorNode> {
        let mut segments = path.split('.');
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            match node {
                ErrorNode::Fields(fields) => node = fields.0.get(segment)?,
                ErrorNode::Messages(_) | ErrorNode::Other(_) => return None,
            }
        }
        Some(node)
    }

    /// Messages at a dotted path; empty if the path is absent or not a leaf.
    #[must_use]
    pub fn messages(&self, path: &str) -> &[String] {
        match self.get(path) {
            Some(node) => node.messages(),
            None => &[],
        }
    }

    /// Every leaf as a `(dotted path, messages)` pair, depth first in key order.
    ///
    /// [`ErrorNode::Other`] leaves are listed with no messages.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &[String])> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a [String])>) {
        for (field, node) in &self.0 {
            let path = if prefix.is_empty() {
                field.clone()
            } else {
                format!("{prefix}.{field}")
            };
            match node {
                ErrorNode::Fields(fields) => fields.flatten_into(&path, out),
                leaf => out.push((path, leaf.messages())),
            }
        }
    }

    /// Returns `true` if there are no field errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over top-level fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.0.iter().map(|(field, node)| (field.as_str(), node))
    }
}

impl FromIterator<(String, ErrorNode)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, ErrorNode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, node) in &self.0 {
            map.serialize_entry(field, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Option::<BTreeMap<String, ErrorNode>>::deserialize(deserializer)?;
        Ok(Self(fields.unwrap_or_default()))
    }
}

/// The gateway rejected a request.
///
/// `message` concatenates every problem in human-readable form; `errors`
/// holds the same problems per field.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayError {
    /// Human-readable summary.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
    /// Per-field errors.
    pub errors: FieldErrors,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.errors.is_empty() {
            let tree = serde_json::to_string_pretty(&self.errors).map_err(|_| fmt::Error)?;
            write!(f, "\n{tree}")?;
        }
        Ok(())
    }
}

impl std::error::Error for GatewayError {}

/// Body of a single-transaction response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionReply {
    /// The transaction, on success.
    pub transaction: Option<Transaction>,
    /// The rejection, on failure.
    pub response: Option<GatewayError>,
}

impl TransactionReply {
    /// Splits the reply into the transaction or the gateway's rejection.
    ///
    /// A `response` with an empty `message` is not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] if `response.message` is non-empty.
    pub fn into_result(self) -> Result<Option<Transaction>, GatewayError> {
        match self.response {
            Some(error) if !error.message.is_empty() => Err(error),
            _ => Ok(self.transaction),
        }
    }
}

/// Body of a tracking-id lookup response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionsReply {
    /// Every transaction sharing the tracking id.
    pub transactions: Option<Vec<Transaction>>,
    /// The rejection, on failure.
    pub response: Option<GatewayError>,
}

impl TransactionsReply {
    /// Splits the reply into the transactions or the gateway's rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] if `response.message` is non-empty.
    pub fn into_result(self) -> Result<Option<Vec<Transaction>>, GatewayError> {
        match self.response {
            Some(error) if !error.message.is_empty() => Err(error),
            _ => Ok(self.transactions),
        }
    }
}
