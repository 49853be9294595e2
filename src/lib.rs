//! # SuiteTalk Client
//!
//! OAuth 1.0a (RFC 5849) signed client for NetSuite's SuiteTalk REST and
//! SuiteQL APIs, using HMAC-SHA256 token-based authentication.
//!
//! ## Features
//!
//! - **Request Signing**: nonce/timestamp generation, parameter
//!   normalization, percent-encoding, and HMAC-SHA256 signatures per
//!   RFC 5849
//! - **SuiteQL Queries**: paginated query driver that follows `next`
//!   links until the result set is exhausted
//! - **REST Wrappers**: signed GET/POST/PUT/PATCH/DELETE calls with the
//!   NetSuite default header bundle
//! - **RESTlet Calls**: account-scoped script/deployment addressing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use suitetalk_client::{Credentials, SuiteQlClient};
//!
//! #[tokio::main]
//! async fn main() -> suitetalk_client::Result<()> {
//!     let credentials = Credentials::new(
//!         "123456",           // account id (realm)
//!         "consumer-key",
//!         "consumer-secret",
//!         "token-key",
//!         "token-secret",
//!     );
//!
//!     let client = SuiteQlClient::new(credentials);
//!     let rows = client
//!         .run_query("SELECT id, entityid FROM customer")
//!         .await?;
//!
//!     for row in rows {
//!         println!("{row}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination failure semantics
//!
//! [`SuiteQlClient::run_query`] treats a non-OK page as a hard stop: the
//! error is logged and an empty result is returned. An empty result can
//! therefore mean "fetch failed" as well as "no data"; use
//! [`SuiteQlClient::fetch_page`] when the distinction matters.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// OAuth 1.0a request signing
pub mod auth;

/// Signed per-verb HTTP wrappers
pub mod http;

/// SuiteQL paginated query driver
pub mod query;

/// RESTlet endpoint addressing
pub mod restlet;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{Credentials, OauthSigner};
pub use error::{Error, ErrorDetail, Result};
pub use http::RestClient;
pub use query::{QueryPage, SuiteQlClient};
pub use restlet::RestletClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
