//! # Pulsewatch
//!
//! An async Rust client for the Pulsewatch APM monitoring REST API.
//!
//! The client exposes typed read operations for remote monitoring resources
//! and transparently follows server-driven pagination: a `list_*` call walks
//! the collection page by page, following RFC 5988 `Link: <...>; rel="next"`
//! headers until the server reports no further page, and returns the whole
//! collection as a single `Vec`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pulsewatch::apm::{Apm, ListKeyTransactionsParams};
//! use pulsewatch::http::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> pulsewatch::Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.pulsewatch.example")
//!         .api_key("PWAK-...")
//!         .build();
//!     let apm = Apm::new(HttpClient::with_config(config));
//!
//!     // Drain every page of the collection.
//!     let params = ListKeyTransactionsParams::default().name("checkout");
//!     let transactions = apm.list_key_transactions(&params).await?;
//!
//!     // Fetch one resource by ID.
//!     let txn = apm.get_key_transaction(42).await?;
//!     println!("{} is {}", txn.name, txn.health_status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Resource clients                     │
//! │ apm::Apm — list_key_transactions / get_key_transaction  │
//! └────────────────────────────┬────────────────────────────┘
//! ┌──────────────┬─────────────┴────────────┬───────────────┐
//! │     http     │        pagination        │     error     │
//! ├──────────────┼──────────────────────────┼───────────────┤
//! │ GET + decode │ Link header parse        │ Http          │
//! │ base URL     │ walk-to-exhaustion loop  │ HttpStatus    │
//! │ API key hdr  │ optional page cap        │ Decode        │
//! └──────────────┴──────────────────────────┴───────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the client
pub mod error;

/// HTTP transport: request building, decoding, response metadata
pub mod http;

/// Pagination: Link header parsing and the page walker
pub mod pagination;

/// APM resource clients (key transactions)
pub mod apm;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
