//! Error types for the HTTP transport and client layers.

use bepaid::reply::GatewayError;
use reqwest::header::InvalidHeaderValue;

/// Errors from sending a request to the gateway.
///
/// Call-level variants carry a static context naming the call, e.g.
/// `"POST /authorizations"`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The base URL parsed but cannot take path segments, e.g. `mailto:`.
    #[error("base url cannot carry a path: {url}")]
    NotABaseUrl {
        /// The rejected URL.
        url: String,
    },
    /// A path identifier such as a uid or tracking id was empty.
    #[error("empty identifier: {context}")]
    EmptyIdentifier {
        /// Human-readable context.
        context: &'static str,
    },
    /// The shop credentials could not be encoded as an `Authorization` header.
    #[error("invalid credentials: {source}")]
    InvalidCredentials {
        /// The underlying header error.
        #[source]
        source: InvalidHeaderValue,
    },
    /// The request body could not be serialized.
    #[error("Failed to serialize request: {context}: {source}")]
    Serialize {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The configured per-request timeout elapsed.
    #[error("Request timed out: {context}: {source}")]
    Timeout {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Failed to read the response body.
    #[error("Failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Maps a reqwest send error, separating timeouts from other failures.
    pub(crate) fn from_send(context: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { context, source }
        } else {
            Self::Http { context, source }
        }
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Errors from a [`Client`](crate::client::Client) call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a readable response.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The response body was not the JSON envelope the gateway documents.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    Decode {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The gateway rejected the request.
    #[error("gateway rejected request: {0}")]
    Gateway(#[from] GatewayError),
    /// The body was valid JSON but held neither a transaction nor an error.
    #[error("Response has no transaction: {context}")]
    MissingTransaction {
        /// Human-readable context.
        context: &'static str,
    },
}

impl ClientError {
    /// Returns the gateway's rejection, if that is what this error is.
    #[must_use]
    pub const fn as_gateway(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway(error) => Some(error),
            _ => None,
        }
    }
}
