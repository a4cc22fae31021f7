#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport and client for the bePaid payment gateway.
//!
//! Two layers sit on top of the request and response types in [`bepaid`]:
//!
//! - [`api`] sends one authenticated request per operation and hands back
//!   the raw HTTP response. A non-2xx status is not an error here, since the
//!   gateway reports rejections in the body.
//! - [`client`] decodes that body into a [`Transaction`](bepaid::transaction::Transaction)
//!   or a [`GatewayError`](bepaid::reply::GatewayError).
//!
//! ```no_run
//! use bepaid::card::CreditCard;
//! use bepaid::request::AuthorizationRequest;
//! use bepaid_http::client::Client;
//! use bepaid_http::config::ApiConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_config(&ApiConfig::from_env()?)?;
//! let card = CreditCard::new("4200000000000000", "123", "John Doe", "01", "2030");
//! let request = AuthorizationRequest::new(100, "USD", "Order #1", "order-1", true, card);
//!
//! let authorization = client.authorization(request).await?;
//! if authorization.is_successful() {
//!     println!("authorized: {}", authorization.uid);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`constants`] - Default gateway URL and environment variable names
//! - [`error`] - Transport and client error types (feature: `client`)
//! - [`config`] - Credentials and settings from the environment (feature: `client`)
//! - [`api`] - The [`GatewayApi`](api::GatewayApi) seam and its reqwest implementation (feature: `client`)
//! - [`client`] - Response-decoding facade (feature: `client`)
//!
//! # Features
//!
//! - `client` (default): the reqwest-backed transport and client
//! - `telemetry`: `tracing` spans and events around every gateway call

pub mod constants;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod error;
