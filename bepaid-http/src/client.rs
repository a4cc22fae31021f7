//! Response-decoding facade over a [`GatewayApi`].
//!
//! [`Client`] sends each operation through its transport, reads the body
//! and turns it into one of three outcomes:
//!
//! - a [`Transaction`] when the body holds one (a [`BalanceReply`] for
//!   [`Client::balance`]),
//! - [`ClientError::Gateway`] when `response.message` is non-empty,
//! - [`ClientError::Decode`] or [`ClientError::MissingTransaction`] when
//!   the body is not a usable envelope.
//!
//! Transport failures pass through unchanged as [`ClientError::Api`].
//! Nothing is retried.

use bepaid::balance::BalanceReply;
use bepaid::reply::{TransactionReply, TransactionsReply};
use bepaid::request::{
    AuthorizationRequest, BalanceRequest, CaptureRequest, CreditRequest, PaymentRequest,
    PayoutRequest, RefundRequest, TokenizationRequest, VoidRequest,
};
use bepaid::transaction::Transaction;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::api::{GatewayApi, HttpApi};
use crate::config::ApiConfig;
use crate::error::{ApiError, ClientError};

/// Gateway client.
///
/// Holds no mutable state; share it behind an `Arc` to issue operations
/// concurrently.
#[derive(Debug, Clone)]
pub struct Client<A: GatewayApi = HttpApi> {
    api: A,
}

impl Client<HttpApi> {
    /// Creates a client over [`HttpApi`] from an [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the base URL or credentials are invalid.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        HttpApi::from_config(config).map(Self::new)
    }
}

impl<A: GatewayApi> Client<A> {
    /// Creates a client over any transport.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the underlying transport.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Places a hold on funds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if sending fails, the gateway rejects the
    /// request, or the response cannot be decoded.
    pub async fn authorization(
        &self,
        request: AuthorizationRequest,
    ) -> Result<Transaction, ClientError> {
        let response = self.api.authorization(request).await?;
        transaction("POST /authorizations", response).await
    }

    /// Authorizes and captures in one step.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn payment(&self, request: PaymentRequest) -> Result<Transaction, ClientError> {
        let response = self.api.payment(request).await?;
        transaction("POST /payments", response).await
    }

    /// Settles an authorization.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn capture(&self, request: CaptureRequest) -> Result<Transaction, ClientError> {
        let response = self.api.capture(request).await?;
        transaction("POST /captures", response).await
    }

    /// Cancels an authorization.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn void(&self, request: VoidRequest) -> Result<Transaction, ClientError> {
        let response = self.api.void(request).await?;
        transaction("POST /voids", response).await
    }

    /// Refunds a captured payment.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn refund(&self, request: RefundRequest) -> Result<Transaction, ClientError> {
        let response = self.api.refund(request).await?;
        transaction("POST /refunds", response).await
    }

    /// Sends funds to a card.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn credit(&self, request: CreditRequest) -> Result<Transaction, ClientError> {
        let response = self.api.credit(request).await?;
        transaction("POST /credits", response).await
    }

    /// Transfers funds to a recipient card.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn payout(&self, request: PayoutRequest) -> Result<Transaction, ClientError> {
        let response = self.api.payout(request).await?;
        transaction("POST /payouts", response).await
    }

    /// Registers a card; the token is in the transaction's `credit_card.token`.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn tokenization(
        &self,
        request: TokenizationRequest,
    ) -> Result<Transaction, ClientError> {
        let response = self.api.tokenization(request).await?;
        transaction("POST /tokenizations", response).await
    }

    /// Reads an account balance.
    ///
    /// The reply is returned whatever its `status`; check
    /// [`BalanceReply::is_successful`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if sending fails, the gateway rejects the
    /// request, or the response cannot be decoded.
    pub async fn balance(&self, request: BalanceRequest) -> Result<BalanceReply, ClientError> {
        let response = self.api.balance(request).await?;
        Ok(decode::<BalanceReply>("POST /balance", response)
            .await?
            .into_result()?)
    }

    /// Fetches a transaction by its gateway uid.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn status_by_uid(&self, uid: &str) -> Result<Transaction, ClientError> {
        let response = self.api.status_by_uid(uid).await?;
        transaction("GET /{uid}", response).await
    }

    /// Fetches every transaction sharing a tracking id.
    ///
    /// Use [`Transaction::latest`] to pick the most recent one.
    ///
    /// # Errors
    ///
    /// See [`Client::authorization`].
    pub async fn status_by_tracking_id(
        &self,
        tracking_id: &str,
    ) -> Result<Vec<Transaction>, ClientError> {
        let context = "GET /tracking_id/{tracking_id}";
        let response = self.api.status_by_tracking_id(tracking_id).await?;
        decode::<TransactionsReply>(context, response)
            .await?
            .into_result()?
            .ok_or(ClientError::MissingTransaction { context })
    }
}

async fn transaction(context: &'static str, response: Response) -> Result<Transaction, ClientError> {
    decode::<TransactionReply>(context, response)
        .await?
        .into_result()?
        .ok_or(ClientError::MissingTransaction { context })
}

/// Reads the whole body and decodes it as JSON, whatever the HTTP status.
async fn decode<R: DeserializeOwned>(
    context: &'static str,
    response: Response,
) -> Result<R, ClientError> {
    #[cfg(feature = "telemetry")]
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::ResponseBodyRead { context, source: e })?;
    serde_json::from_slice(&body).map_err(|source| {
        #[cfg(feature = "telemetry")]
        tracing::warn!(%status, error = %source, "{context}: undecodable gateway response");
        ClientError::Decode { context, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BoxFuture;
    use bepaid::card::CreditCard;
    use bepaid::customer::Customer;
    use std::time::Duration;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REJECTED: &str = r#"{"response":{"message":"Number is invalid. Verification value Only digits allowed.","errors":{"credit_card":{"number":["is invalid"],"verification_value":["Only digits allowed"]}}}}"#;

    /// Answers every call with the same canned response.
    struct StubApi {
        status: u16,
        body: &'static str,
    }

    impl StubApi {
        fn respond(&self) -> BoxFuture<'_, Result<Response, ApiError>> {
            let response = http::Response::builder()
                .status(self.status)
                .body(self.body)
                .unwrap();
            Box::pin(async move { Ok(Response::from(response)) })
        }
    }

    impl GatewayApi for StubApi {
        fn authorization(&self, _: AuthorizationRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn payment(&self, _: PaymentRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn capture(&self, _: CaptureRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn void(&self, _: VoidRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn refund(&self, _: RefundRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn credit(&self, _: CreditRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn payout(&self, _: PayoutRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn tokenization(&self, _: TokenizationRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn balance(&self, _: BalanceRequest) -> BoxFuture<'_, Result<Response, ApiError>> {
            self.respond()
        }
        fn status_by_uid<'a>(&'a self, _: &'a str) -> BoxFuture<'a, Result<Response, ApiError>> {
            self.respond()
        }
        fn status_by_tracking_id<'a>(
            &'a self,
            _: &'a str,
        ) -> BoxFuture<'a, Result<Response, ApiError>> {
            self.respond()
        }
    }

    fn stub(status: u16, body: &'static str) -> Client<StubApi> {
        Client::new(StubApi { status, body })
    }

    fn card() -> CreditCard {
        CreditCard::new("4200000000000000", "123", "John Doe", "01", "2030")
    }

    #[tokio::test]
    async fn test_success_decodes_transaction() {
        let client = stub(
            200,
            r#"{"transaction":{"uid":"1-310b0da80b","status":"successful","type":"capture","amount":63,"parent_uid":"1-abc"}}"#,
        );
        let tx = client.capture(CaptureRequest::new("1-abc", 63)).await.unwrap();
        assert_eq!(tx.uid, "1-310b0da80b");
        assert!(tx.is_successful());
        assert!(tx.is_capture());
        assert_eq!(tx.parent_uid.as_deref(), Some("1-abc"));
    }

    #[tokio::test]
    async fn test_gateway_error_is_surfaced() {
        let err = stub(422, REJECTED)
            .void(VoidRequest::new("1-abc", 1))
            .await
            .unwrap_err();
        let gateway = err.as_gateway().unwrap();
        assert_eq!(
            gateway.message,
            "Number is invalid. Verification value Only digits allowed."
        );
        assert_eq!(gateway.errors.messages("credit_card.number"), ["is invalid"]);
        let raw: serde_json::Value = serde_json::from_str(REJECTED).unwrap();
        assert_eq!(
            serde_json::to_value(&gateway.errors).unwrap(),
            raw["response"]["errors"]
        );
    }

    #[tokio::test]
    async fn test_non_string_error_leaves_still_reject() {
        let body = r#"{"response":{"message":"Amount must be greater than 0.","errors":{"amount":[{"count":0}],"test":[true]}}}"#;
        let err = stub(422, body)
            .capture(CaptureRequest::new("1-abc", 0))
            .await
            .unwrap_err();
        let gateway = err.as_gateway().expect("gateway rejection");
        assert_eq!(gateway.message, "Amount must be greater than 0.");
        let raw: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            serde_json::to_value(&gateway.errors).unwrap(),
            raw["response"]["errors"]
        );
    }

    #[tokio::test]
    async fn test_tokenization_returns_token() {
        let client = stub(
            200,
            r#"{"transaction":{"uid":"3-t","status":"successful","type":"tokenization","credit_card":{"token":"tok_9","last_4":"0000"}}}"#,
        );
        let request = TokenizationRequest::new(
            100,
            "BYN",
            "bind",
            "bind-1",
            card(),
            Customer::new("127.0.0.1", "j@example.com"),
        );
        let tx = client.tokenization(request).await.unwrap();
        assert_eq!(tx.uid, "3-t");
        assert_eq!(tx.credit_card.unwrap().token, "tok_9");
    }

    #[tokio::test]
    async fn test_balance_reply() {
        let client = stub(
            200,
            r#"{"status":"successful","result":{"gatewayId":1,"account":"A","amount":500,"currency":"BYN"}}"#,
        );
        let reply = client.balance(BalanceRequest::new()).await.unwrap();
        assert!(reply.is_successful());
        assert_eq!(reply.result.unwrap().account, "A");

        let err = stub(401, r#"{"response":{"message":"Access denied"}}"#)
            .balance(BalanceRequest::new())
            .await
            .unwrap_err();
        assert_eq!(err.as_gateway().unwrap().message, "Access denied");
    }

    #[tokio::test]
    async fn test_gateway_error_wins_over_status() {
        // Rejections are decided by the body, even on 200.
        let err = stub(200, r#"{"response":{"message":"Shop is inactive"}}"#)
            .status_by_uid("1-abc")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Gateway(ref e) if e.message == "Shop is inactive"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let err = stub(502, "<html>Bad Gateway</html>")
            .refund(RefundRequest::new("1-abc", 1, "r"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode { context: "POST /refunds", .. }));
    }

    #[tokio::test]
    async fn test_empty_envelope_is_missing_transaction() {
        let err = stub(200, r#"{"response":{"message":""}}"#)
            .payment(PaymentRequest::new(1, "BYN", "d", "t", true, card()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingTransaction { context: "POST /payments" }
        ));
    }

    #[tokio::test]
    async fn test_tracking_id_returns_all_transactions() {
        let client = stub(
            200,
            r#"{"transactions":[
                {"uid":"1-a","type":"authorization","created_at":"2024-05-01T10:00:00+03:00"},
                {"uid":"2-b","type":"void","created_at":"2024-05-01T10:05:00+03:00"}
            ]}"#,
        );
        let transactions = client.status_by_tracking_id("order-1").await.unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(Transaction::latest(&transactions).unwrap().uid, "2-b");

        let err = stub(200, "{}").status_by_tracking_id("order-1").await.unwrap_err();
        assert!(matches!(err, ClientError::MissingTransaction { .. }));
    }

    #[tokio::test]
    async fn test_end_to_end_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transactions/authorizations"))
            .and(body_string(
                r#"{"request":{"amount":100,"currency":"USD","description":"Order #1","tracking_id":"order-1","test":true,"credit_card":{"number":"4200000000000000","verification_value":"123","holder":"John Doe","exp_month":"01","exp_year":"2030","skip_three_d_secure_verification":false}}}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"transaction":{"uid":"2-52671c8733","status":"successful","type":"authorization","amount":100,"currency":"USD","tracking_id":"order-1","test":true}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let config = ApiConfig::new("361", "b8647b68")
            .with_base_url(format!("{}/transactions", server.uri()));
        let client = Client::from_config(&config).unwrap();
        let request = AuthorizationRequest::new(100, "USD", "Order #1", "order-1", true, card());
        let tx = client.authorization(request).await.unwrap();
        assert_eq!(tx.uid, "2-52671c8733");
        assert!(tx.is_authorization());
        assert_eq!(tx.tracking_id, "order-1");
    }

    #[tokio::test]
    async fn test_end_to_end_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authorizations"))
            .respond_with(ResponseTemplate::new(422).set_body_string(REJECTED))
            .mount(&server)
            .await;

        let client = Client::from_config(&ApiConfig::new("1", "k").with_base_url(server.uri()))
            .unwrap();
        let request = AuthorizationRequest::new(1, "USD", "d", "t", true, card());
        let err = client.authorization(request).await.unwrap_err();
        assert_eq!(err.as_gateway().unwrap().errors.flatten().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_timeout_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = ApiConfig::new("1", "k")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(100));
        let err = Client::from_config(&config)
            .unwrap()
            .status_by_uid("1-abc")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api(ref e) if e.is_timeout()));
    }
}
