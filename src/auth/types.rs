//! Credential and signing context types

use crate::error::{Error, Result};

/// Token-based authentication credentials for a NetSuite account.
///
/// Immutable for the lifetime of a client instance. The realm is the
/// account identifier and doubles as the protection-domain value in the
/// `Authorization` header. Token key and secret are optional at
/// construction but required before any request can be signed.
#[derive(Clone)]
pub struct Credentials {
    /// Account identifier, used as the OAuth realm
    pub realm: String,
    /// Consumer (integration record) key
    pub consumer_key: String,
    /// Consumer secret
    pub consumer_secret: String,
    /// Access token key
    pub token_key: Option<String>,
    /// Access token secret
    pub token_secret: Option<String>,
}

impl Credentials {
    /// Create credentials with a full token pair
    pub fn new(
        realm: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token_key: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            realm: realm.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_key: Some(token_key.into()),
            token_secret: Some(token_secret.into()),
        }
    }

    /// Create credentials without an access token
    pub fn without_token(
        realm: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            realm: realm.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_key: None,
            token_secret: None,
        }
    }

    /// Token key, or a missing-credential error if absent
    pub fn token_key(&self) -> Result<&str> {
        self.token_key
            .as_deref()
            .ok_or_else(|| Error::missing_credential("token_key"))
    }

    /// Token secret, or a missing-credential error if absent
    pub fn token_secret(&self) -> Result<&str> {
        self.token_secret
            .as_deref()
            .ok_or_else(|| Error::missing_credential("token_secret"))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secrets stay out of logs
        f.debug_struct("Credentials")
            .field("realm", &self.realm)
            .field("consumer_key", &self.consumer_key)
            .field("has_token", &self.token_key.is_some())
            .finish_non_exhaustive()
    }
}

/// All intermediate values for one signing operation.
///
/// Allocated fresh for every signed request and discarded once the header
/// is assembled. Nonce and timestamp are never reused across contexts
/// (RFC 5849 §3.3), so a signer can be shared across concurrent callers.
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// Upper-cased HTTP method
    pub method: String,
    /// Target URL with the query string removed
    pub base_url: String,
    /// Single-use random token
    pub nonce: String,
    /// Seconds since the Unix epoch, as a decimal string
    pub timestamp: String,
    /// Sorted, joined, percent-encoded parameter string
    pub normalized_params: String,
    /// `METHOD&encoded-url&normalized-params`
    pub base_string: String,
    /// Percent-encoded Base64 HMAC-SHA256 digest
    pub signature: String,
}
