#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the bePaid payment gateway.
//!
//! This crate holds everything needed to talk to the gateway that does not
//! involve a network: request value objects and their exact JSON envelopes,
//! the nested card/customer/billing objects they embed, and the transaction
//! and error payloads the gateway answers with. The HTTP side lives in
//! `bepaid-http`.
//!
//! # Overview
//!
//! Every operation is a `POST` of a `{"request": {...}}` envelope. A request
//! is built from its mandatory fields, refined with `with_*` calls, and
//! optionally checked with `validate()` before sending:
//!
//! ```rust
//! use bepaid::card::CreditCard;
//! use bepaid::request::{AuthorizationRequest, GatewayRequest};
//! use bepaid::amount::Currency;
//!
//! let card = CreditCard::new("4200000000000000", "123", "John Doe", "01", "2030");
//! let request = AuthorizationRequest::new(100, Currency::USD, "Order #1", "order-1", true, card)
//!     .with_duplicate_check(false);
//! request.validate().unwrap();
//!
//! let json = request.to_json().unwrap();
//! assert!(json.starts_with(r#"{"request":{"amount":100,"currency":"USD""#));
//! ```
//!
//! # Modules
//!
//! - [`amount`] - Minor-unit amounts and ISO-4217 currency codes
//! - [`card`] - Credit card details (explicit or tokenized)
//! - [`customer`] - Customer fraud-check data
//! - [`billing`] - Billing address
//! - [`language`] - Notification languages
//! - [`request`] - Request value objects and the wire envelope
//! - [`transaction`] - Transaction payloads returned by the gateway
//! - [`reply`] - Response envelopes and structured gateway errors
//! - [`balance`] - Shop account balance
//! - [`error`] - Local validation errors

pub mod amount;
pub mod balance;
pub mod billing;
pub mod card;
pub mod customer;
pub mod error;
pub mod language;
pub mod reply;
pub mod request;
pub mod transaction;
