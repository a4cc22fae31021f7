//! Authenticated transport to the gateway.
//!
//! [`GatewayApi`] is the seam between the [`Client`](crate::client::Client)
//! and the network: one method per operation, each returning the raw HTTP
//! response. [`HttpApi`] is the reqwest-backed implementation.
//!
//! ## Requests
//!
//! - Operations: `POST {base}{operation}` with the `{"request": ...}`
//!   envelope as body, e.g. `POST https://gateway.bepaid.by/transactions/captures`.
//!   The operation segment is [`Operation::path`](bepaid::request::Operation::path).
//! - Status by uid: `GET {base}{uid}`
//! - Status by tracking id: `GET {base}tracking_id/{tracking_id}`
//!
//! Every request carries `Authorization: Basic base64(shop_id:secret_key)`
//! and `Accept: application/json`; POSTs also send
//! `Content-Type: application/json`.
//!
//! ## Cancellation
//!
//! Dropping a returned future aborts the request in flight. A timeout set
//! with [`HttpApi::with_timeout`] surfaces as [`ApiError::Timeout`].

use std::fmt::{self, Display};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bepaid::request::{
    AuthorizationRequest, BalanceRequest, CaptureRequest, CreditRequest, GatewayRequest,
    PaymentRequest, PayoutRequest, RefundRequest, TokenizationRequest, VoidRequest,
};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::ApiConfig;
use crate::constants::{APPLICATION_JSON, TRACKING_ID_SEGMENT};
use crate::error::ApiError;

/// A boxed, `Send` future borrowing from `'a`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Sends gateway operations and returns the raw responses.
///
/// Non-2xx statuses are returned as `Ok`; the gateway explains rejections
/// in the body, which the [`Client`](crate::client::Client) decodes.
pub trait GatewayApi: Send + Sync {
    /// `POST authorizations`
    fn authorization(
        &self,
        request: AuthorizationRequest,
    ) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST payments`
    fn payment(&self, request: PaymentRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST captures`
    fn capture(&self, request: CaptureRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST voids`
    fn void(&self, request: VoidRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST refunds`
    fn refund(&self, request: RefundRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST credits`
    fn credit(&self, request: CreditRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST payouts`
    fn payout(&self, request: PayoutRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST tokenizations`
    fn tokenization(
        &self,
        request: TokenizationRequest,
    ) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `POST balance`
    fn balance(&self, request: BalanceRequest) -> BoxFuture<'_, Result<Response, ApiError>>;

    /// `GET {uid}`
    fn status_by_uid<'a>(&'a self, uid: &'a str) -> BoxFuture<'a, Result<Response, ApiError>>;

    /// `GET tracking_id/{tracking_id}`
    fn status_by_tracking_id<'a>(
        &'a self,
        tracking_id: &'a str,
    ) -> BoxFuture<'a, Result<Response, ApiError>>;
}

/// [`GatewayApi`] over a shared [`reqwest::Client`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpApi {
    /// Shared Reqwest HTTP client
    client: Client,
    /// Base URL, always ending in `/`
    base_url: Url,
    /// Precomputed `Authorization` header, marked sensitive
    auth: HeaderValue,
    /// Optional request timeout
    timeout: Option<Duration>,
}

impl HttpApi {
    /// Creates a transport for the gateway at `base_url`.
    ///
    /// Trailing slashes on `base_url` are normalized to exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UrlParse`] if `base_url` does not parse,
    /// [`ApiError::NotABaseUrl`] if it cannot take a path, or
    /// [`ApiError::InvalidCredentials`] if the credentials cannot be encoded.
    pub fn try_new(
        client: Client,
        base_url: &str,
        shop_id: &str,
        secret_key: &str,
    ) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim_end_matches('/').to_owned();
        normalized.push('/');
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::UrlParse {
            context: "Failed to parse base url",
            source: e,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::NotABaseUrl {
                url: base_url.into(),
            });
        }

        let credentials = STANDARD.encode(format!("{shop_id}:{secret_key}"));
        let mut auth = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|e| ApiError::InvalidCredentials { source: e })?;
        auth.set_sensitive(true);

        Ok(Self {
            client,
            base_url,
            auth,
            timeout: None,
        })
    }

    /// Creates a transport from an [`ApiConfig`] with a fresh [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// See [`HttpApi::try_new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let api = Self::try_new(
            Client::new(),
            &config.base_url,
            &config.shop_id,
            &config.secret_key,
        )?;
        Ok(match config.timeout {
            Some(timeout) => api.with_timeout(timeout),
            None => api,
        })
    }

    /// Sets a timeout for all future requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // try_new rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(AUTHORIZATION, self.auth.clone())
            .header(ACCEPT, APPLICATION_JSON);
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Generic POST helper that handles envelope serialization, error
    /// mapping, timeout application, and telemetry integration.
    ///
    /// `context` is a human-readable identifier used in tracing and error
    /// messages (e.g. `"POST /captures"`).
    async fn post<T: GatewayRequest>(
        &self,
        context: &'static str,
        request: &T,
    ) -> Result<Response, ApiError> {
        let result = self.send_post(context, request).await;
        record_result_on_span(&result);
        result
    }

    async fn send_post<T: GatewayRequest>(
        &self,
        context: &'static str,
        request: &T,
    ) -> Result<Response, ApiError> {
        let body = serde_json::to_vec(&request.envelope())
            .map_err(|e| ApiError::Serialize { context, source: e })?;
        let url = self.endpoint(&[T::OPERATION.path()]);
        self.authorized(self.client.post(url))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::from_send(context, e))
    }

    /// Generic GET helper, see [`HttpApi::post`].
    ///
    /// An empty segment would address the collection instead of one
    /// resource, so it is rejected before anything is sent.
    async fn get(&self, context: &'static str, segments: &[&str]) -> Result<Response, ApiError> {
        let result = if segments.iter().any(|segment| segment.trim().is_empty()) {
            Err(ApiError::EmptyIdentifier { context })
        } else {
            self.authorized(self.client.get(self.endpoint(segments)))
                .send()
                .await
                .map_err(|e| ApiError::from_send(context, e))
        };
        record_result_on_span(&result);
        result
    }

    /// Sends an authorization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.authorization",
            skip_all,
            fields(tracking_id = %request.tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn authorization(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<Response, ApiError> {
        self.post("POST /authorizations", request).await
    }

    /// Sends a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.payment",
            skip_all,
            fields(tracking_id = %request.tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn payment(&self, request: &PaymentRequest) -> Result<Response, ApiError> {
        self.post("POST /payments", request).await
    }

    /// Sends a capture.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.capture",
            skip_all,
            fields(parent_uid = %request.parent_uid, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn capture(&self, request: &CaptureRequest) -> Result<Response, ApiError> {
        self.post("POST /captures", request).await
    }

    /// Sends a void.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.void",
            skip_all,
            fields(parent_uid = %request.parent_uid, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn void(&self, request: &VoidRequest) -> Result<Response, ApiError> {
        self.post("POST /voids", request).await
    }

    /// Sends a refund.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.refund",
            skip_all,
            fields(parent_uid = %request.parent_uid, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn refund(&self, request: &RefundRequest) -> Result<Response, ApiError> {
        self.post("POST /refunds", request).await
    }

    /// Sends a credit to a card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.credit",
            skip_all,
            fields(tracking_id = %request.tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn credit(&self, request: &CreditRequest) -> Result<Response, ApiError> {
        self.post("POST /credits", request).await
    }

    /// Sends a payout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.payout",
            skip_all,
            fields(tracking_id = %request.tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn payout(&self, request: &PayoutRequest) -> Result<Response, ApiError> {
        self.post("POST /payouts", request).await
    }

    /// Sends a card tokenization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.tokenization",
            skip_all,
            fields(tracking_id = %request.tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn tokenization(&self, request: &TokenizationRequest) -> Result<Response, ApiError> {
        self.post("POST /tokenizations", request).await
    }

    /// Queries an account balance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.balance",
            skip_all,
            fields(otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn balance(&self, request: &BalanceRequest) -> Result<Response, ApiError> {
        self.post("POST /balance", request).await
    }

    /// Looks up a transaction by its gateway uid.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyIdentifier`] for a blank `uid`, or another
    /// [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.status_by_uid",
            skip_all,
            fields(uid = %uid, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn status_by_uid(&self, uid: &str) -> Result<Response, ApiError> {
        self.get("GET /{uid}", &[uid]).await
    }

    /// Looks up every transaction sharing a tracking id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyIdentifier`] for a blank `tracking_id`, or
    /// another [`ApiError`] if the request could not be sent.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "bepaid.api.status_by_tracking_id",
            skip_all,
            fields(tracking_id = %tracking_id, otel.status_code = tracing::field::Empty, error.message = tracing::field::Empty)
        )
    )]
    pub async fn status_by_tracking_id(&self, tracking_id: &str) -> Result<Response, ApiError> {
        self.get("GET /tracking_id/{tracking_id}", &[TRACKING_ID_SEGMENT, tracking_id])
            .await
    }
}

impl GatewayApi for HttpApi {
    fn authorization(
        &self,
        request: AuthorizationRequest,
    ) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::authorization(self, &request).await })
    }

    fn payment(&self, request: PaymentRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::payment(self, &request).await })
    }

    fn capture(&self, request: CaptureRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::capture(self, &request).await })
    }

    fn void(&self, request: VoidRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::void(self, &request).await })
    }

    fn refund(&self, request: RefundRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::refund(self, &request).await })
    }

    fn credit(&self, request: CreditRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::credit(self, &request).await })
    }

    fn payout(&self, request: PayoutRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::payout(self, &request).await })
    }

    fn tokenization(
        &self,
        request: TokenizationRequest,
    ) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::tokenization(self, &request).await })
    }

    fn balance(&self, request: BalanceRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
        Box::pin(async move { Self::balance(self, &request).await })
    }

    fn status_by_uid<'a>(&'a self, uid: &'a str) -> BoxFuture<'a, Result<Response, ApiError>> {
        Box::pin(Self::status_by_uid(self, uid))
    }

    fn status_by_tracking_id<'a>(
        &'a self,
        tracking_id: &'a str,
    ) -> BoxFuture<'a, Result<Response, ApiError>> {
        Box::pin(Self::status_by_tracking_id(self, tracking_id))
    }
}

impl fmt::Debug for HttpApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpApi")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Records the outcome of a request on a tracing span, including status and errors.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to gateway failed");
        }
    }
}

/// Records the outcome of a request on a tracing span, including status and errors.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use bepaid::card::CreditCard;
    use bepaid::customer::Customer;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // base64("361:b8647b68")
    const AUTH: &str = "Basic MzYxOmI4NjQ3YjY4";

    fn api_for(server: &MockServer) -> HttpApi {
        HttpApi::try_new(Client::new(), &server.uri(), "361", "b8647b68").unwrap()
    }

    #[test]
    fn test_base_url_normalization() {
        for raw in [
            "https://gateway.bepaid.by/transactions",
            "https://gateway.bepaid.by/transactions/",
            "https://gateway.bepaid.by/transactions///",
        ] {
            let api = HttpApi::try_new(Client::new(), raw, "1", "k").unwrap();
            assert_eq!(api.base_url().as_str(), "https://gateway.bepaid.by/transactions/");
            assert_eq!(
                api.endpoint(&["captures"]).as_str(),
                "https://gateway.bepaid.by/transactions/captures"
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpApi::try_new(Client::new(), "not a url", "1", "k").unwrap_err();
        assert!(matches!(err, ApiError::UrlParse { .. }));
        let err = HttpApi::try_new(Client::new(), "mailto:shop@example.com", "1", "k").unwrap_err();
        assert!(matches!(err, ApiError::NotABaseUrl { ref url } if url.starts_with("mailto:")));
        assert!(err.to_string().starts_with("base url cannot carry a path"));
    }

    #[test]
    fn test_endpoint_percent_encodes_segments() {
        let api = HttpApi::try_new(Client::new(), "https://gw.example/transactions", "1", "k")
            .unwrap();
        assert_eq!(
            api.endpoint(&[TRACKING_ID_SEGMENT, "order 1/2"]).as_str(),
            "https://gw.example/transactions/tracking_id/order%201%2F2"
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let api = HttpApi::try_new(Client::new(), "https://gw.example", "361", "b8647b68").unwrap();
        let debug = format!("{api:?}");
        assert!(!debug.contains("MzYx"));
        assert!(debug.contains("gw.example"));
    }

    #[test]
    fn test_from_config_applies_timeout() {
        let config = ApiConfig::new("1", "k")
            .with_base_url("https://gw.example")
            .with_timeout(Duration::from_secs(5));
        let api = HttpApi::from_config(&config).unwrap();
        assert_eq!(api.timeout(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_capture_sends_envelope_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/captures"))
            .and(header("authorization", AUTH))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_string(r#"{"request":{"parent_uid":"id123","amount":63}}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let response = GatewayApi::capture(&api, CaptureRequest::new("id123", 63))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_each_operation_hits_its_path() {
        let server = MockServer::start().await;
        for p in [
            "/authorizations",
            "/payments",
            "/voids",
            "/refunds",
            "/credits",
            "/payouts",
            "/tokenizations",
        ] {
            Mock::given(method("POST"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server)
                .await;
        }

        let api = api_for(&server);
        let card = CreditCard::new("4200000000000000", "123", "J", "01", "2030");
        GatewayApi::authorization(
            &api,
            AuthorizationRequest::new(1, "USD", "d", "t", true, card.clone()),
        )
        .await
        .unwrap();
        GatewayApi::payment(&api, PaymentRequest::new(1, "USD", "d", "t", true, card.clone()))
            .await
            .unwrap();
        GatewayApi::credit(&api, CreditRequest::new(1, "USD", "d", "t", card.clone()))
            .await
            .unwrap();
        GatewayApi::payout(&api, PayoutRequest::new(1, "USD", "d", "t", card.clone()))
            .await
            .unwrap();
        GatewayApi::tokenization(
            &api,
            TokenizationRequest::new(1, "USD", "d", "t", card, Customer::new("127.0.0.1", "j@example.com")),
        )
        .await
        .unwrap();
        GatewayApi::void(&api, VoidRequest::new("uid", 1)).await.unwrap();
        GatewayApi::refund(&api, RefundRequest::new("uid", 1, "r"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_balance_sends_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/balance"))
            .and(header("authorization", AUTH))
            .and(body_string(r#"{"request":{"currency":"BYN"}}"#))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        api.balance(&BalanceRequest::new().with_currency("BYN"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/refunds"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"response":{"message":"Reason can't be blank"}}"#),
            )
            .mount(&server)
            .await;

        let api = api_for(&server);
        let response = api.refund(&RefundRequest::new("uid", 1, "")).await.unwrap();
        assert_eq!(response.status().as_u16(), 422);
    }

    #[tokio::test]
    async fn test_status_lookups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1-310b0da80b"))
            .and(header("authorization", AUTH))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tracking_id/order-1"))
            .and(header("authorization", AUTH))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        api.status_by_uid("1-310b0da80b").await.unwrap();
        api.status_by_tracking_id("order-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_identifiers_are_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.status_by_uid("").await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyIdentifier { context: "GET /{uid}" }));
        let err = GatewayApi::status_by_tracking_id(&api, " ").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::EmptyIdentifier { context: "GET /tracking_id/{tracking_id}" }
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let api = api_for(&server).with_timeout(Duration::from_millis(100));
        let err = api.status_by_uid("slow").await.unwrap_err();
        assert!(err.is_timeout(), "{err}");
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let api = HttpApi::try_new(Client::new(), &uri, "1", "k").unwrap();
        let err = api.status_by_uid("uid").await.unwrap_err();
        assert!(matches!(err, ApiError::Http { context: "GET /{uid}", .. }));
    }
}
