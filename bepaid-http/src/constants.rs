//! Gateway URLs and environment variable names.

/// Production endpoint of the gateway's transaction API.
pub const DEFAULT_BASE_URL: &str = "https://gateway.bepaid.by/transactions/";

/// Path segment for status lookups by tracking id.
pub const TRACKING_ID_SEGMENT: &str = "tracking_id";

/// Overrides [`DEFAULT_BASE_URL`].
pub const ENV_API_HOST: &str = "BEPAID_API_HOST";

/// Shop id used as the Basic auth user name.
pub const ENV_SHOP_ID: &str = "BEPAID_SHOP_ID";

/// Shop secret key used as the Basic auth password.
pub const ENV_SECRET_KEY: &str = "BEPAID_SECRET_KEY";

/// Per-request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "BEPAID_TIMEOUT_SECS";

/// Media type of every request and response body.
pub const APPLICATION_JSON: &str = "application/json";
