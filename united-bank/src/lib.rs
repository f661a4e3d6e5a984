//! # United Bank gateway adapter
//!
//! Typed client for the United Bank account-information API:
//! - Wire mapping of transactions into the gateway's request format
//! - Interpretation of the gateway's 200-with-error-fields responses
//! - Pluggable HTTP transport (reqwest by default)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Client                      │
//! │   fetch_account_information_for_transaction  │
//! └──────┬──────────────────────────┬────────────┘
//!        │                          │
//! ┌──────▼───────┐          ┌───────▼────────┐
//! │ Wire Mapper  │          │   HttpClient   │
//! │  (wire.rs)   │          │ (transport.rs) │
//! └──────────────┘          └───────┬────────┘
//!                                   │
//!                           ┌───────▼────────┐
//!                           │ United Bank API│
//!                           └────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use united_bank::{AccountTransaction, Client, Config, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> united_bank::Result<()> {
//!     let config = Config::from_env()?;
//!     let http = ReqwestHttpClient::new(config.timeout_seconds)?;
//!     let client = Client::new(config, http);
//!
//!     let transaction = AccountTransaction::new("UNAFGHAC", "000123", "UNAFGHAC", "route-66");
//!     let response = client
//!         .fetch_account_information_for_transaction(&transaction)
//!         .await?;
//!
//!     match response.business_error() {
//!         Some((code, description)) => println!("rejected: {} {}", code, description),
//!         None => println!("account name: {:?}", response.account_name),
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod wire;

pub use client::Client;
pub use config::{Config, GatewayConfig};
pub use error::{Error, Result};
pub use transport::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use types::*;
pub use wire::{build_request_payload, parse_account_information_response, RequestEnvelope};

/// Path of the account-information endpoint, relative to the base URL
pub const ACCOUNT_INFORMATION_PATH: &str = "accountinformation/v1.0";

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
