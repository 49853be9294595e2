//! OAuth 1.0a authentication module
//!
//! Implements RFC 5849 request signing with HMAC-SHA256, as required for
//! NetSuite token-based authentication.
//!
//! The [`OauthSigner`] turns an (HTTP method, URL) pair into a complete
//! `Authorization` header value. Each call builds its own signing context,
//! so no state survives between invocations.

mod signer;
mod types;

pub use signer::{encode_oauth, split_url, OauthSigner, OAUTH_VERSION, SIGNATURE_METHOD};
pub use types::{Credentials, SigningContext};
