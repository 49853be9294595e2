//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA256)
//!
//! Produces the `Authorization` header NetSuite expects for token-based
//! authentication. Signing is a pure pipeline from (method, url) to a
//! header value: every call allocates its own [`SigningContext`] with a
//! fresh nonce and timestamp, so one signer is safe to share.

use super::types::{Credentials, SigningContext};
use crate::error::{Error, Result};
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Signature method advertised in the header and the parameter set
pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";

/// OAuth version advertised in the header and the parameter set
pub const OAUTH_VERSION: &str = "1.0";

/// Signs requests against a single NetSuite account.
#[derive(Debug)]
pub struct OauthSigner {
    credentials: Credentials,
}

impl OauthSigner {
    /// Create a signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Get the credentials this signer was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Produce the `Authorization` header value for one request.
    ///
    /// Generates a fresh nonce and timestamp; two calls with identical
    /// inputs never yield the same signature. Fails with a
    /// missing-credential error when the token pair is absent.
    pub fn authorization(&self, method: &str, url: &str) -> Result<String> {
        let ctx = self.context(method, url, generate_nonce(), generate_timestamp())?;
        debug!(method = %ctx.method, url = %ctx.base_url, "signed request");
        self.assemble_header(&ctx)
    }

    /// Produce the default signed header bundle for one request:
    /// `Prefer`, `Content-Type`, `Authorization`, `cache-control`.
    pub fn default_headers(&self, method: &str, url: &str) -> Result<HashMap<String, String>> {
        let mut headers = HashMap::new();
        headers.insert("Prefer".to_string(), "transient".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            self.authorization(method, url)?,
        );
        headers.insert("cache-control".to_string(), "no-cache".to_string());
        Ok(headers)
    }

    /// Build the full signing context for a (method, url, nonce, timestamp)
    /// tuple. Deterministic given its inputs; the entry point for
    /// known-answer tests.
    pub(crate) fn context(
        &self,
        method: &str,
        url: &str,
        nonce: String,
        timestamp: String,
    ) -> Result<SigningContext> {
        let method = method.to_uppercase();
        let token_key = self.credentials.token_key()?.to_string();
        let token_secret = self.credentials.token_secret()?.to_string();

        let (base_url, query_params) = split_url(url);

        // RFC 5849 §3.4.1.3: protocol parameters plus URL query parameters,
        // excluding oauth_signature. Query parameters win on a name
        // collision.
        let mut params: BTreeMap<String, String> = BTreeMap::new();
        params.insert(
            "oauth_consumer_key".to_string(),
            self.credentials.consumer_key.clone(),
        );
        params.insert("oauth_token".to_string(), token_key);
        params.insert(
            "oauth_signature_method".to_string(),
            SIGNATURE_METHOD.to_string(),
        );
        params.insert("oauth_timestamp".to_string(), timestamp.clone());
        params.insert("oauth_nonce".to_string(), nonce.clone());
        params.insert("oauth_version".to_string(), OAUTH_VERSION.to_string());
        for (key, value) in query_params {
            params.insert(key, value);
        }

        let normalized_params = normalize_parameters(&params);

        // §3.4.1.1: METHOD & encoded base URL & normalized parameters.
        // The base URL is encoded as a whole unit before concatenation.
        let base_string = format!(
            "{}&{}&{}",
            method,
            encode_oauth(&base_url),
            normalized_params
        );

        // §3.4.2: key is consumer secret and token secret joined by '&';
        // the digest is Base64-encoded then percent-encoded.
        let key = format!("{}&{}", self.credentials.consumer_secret, token_secret);
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| Error::config(format!("HMAC key rejected: {e}")))?;
        mac.update(base_string.as_bytes());
        let digest = mac.finalize().into_bytes();
        let signature = encode_oauth(&base64::engine::general_purpose::STANDARD.encode(digest));

        Ok(SigningContext {
            method,
            base_url,
            nonce,
            timestamp,
            normalized_params,
            base_string,
            signature,
        })
    }

    /// Emit the fixed-order header string
    fn assemble_header(&self, ctx: &SigningContext) -> Result<String> {
        let token_key = self.credentials.token_key()?;
        Ok(format!(
            "OAuth realm=\"{}\",\
             oauth_consumer_key=\"{}\",\
             oauth_token=\"{}\",\
             oauth_signature_method=\"{}\",\
             oauth_timestamp=\"{}\",\
             oauth_nonce=\"{}\",\
             oauth_version=\"{}\",\
             oauth_signature=\"{}\"",
            self.credentials.realm,
            self.credentials.consumer_key,
            token_key,
            SIGNATURE_METHOD,
            ctx.timestamp,
            ctx.nonce,
            OAUTH_VERSION,
            ctx.signature,
        ))
    }
}

/// Generate a single-use nonce: two independent 128-bit random identifiers,
/// hex-encoded and concatenated (RFC 5849 §3.3 uniqueness requirement).
fn generate_nonce() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

/// Current time as a positive decimal seconds-since-epoch string
fn generate_timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Percent-encode per RFC 3986 §2.3 as required by RFC 5849 §3.6.
///
/// UTF-8 octets; unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass
/// through, everything else becomes `%XX` with uppercase hex. Space is
/// `%20`, never `+`.
pub fn encode_oauth(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0F)] as char);
            }
        }
    }
    out
}

/// Split a URL at the first `?` into its base URL and parsed query map.
///
/// Query names and values are percent-decoded with `+` treated as space.
/// When a name repeats only the first occurrence is kept; NetSuite
/// endpoints do not use repeated parameters.
pub fn split_url(url: &str) -> (String, BTreeMap<String, String>) {
    let mut params = BTreeMap::new();
    let Some((base_url, query)) = url.split_once('?') else {
        return (url.to_string(), params);
    };

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = percent_decode(name);
        let value = percent_decode(value);
        params.entry(name).or_insert(value);
    }

    (base_url.to_string(), params)
}

/// Sort by name (byte order), join as `name=value` pairs with `&`, then
/// percent-encode the whole string as one opaque token (RFC 5849
/// §3.4.1.3.2 as NetSuite applies it).
fn normalize_parameters(params: &BTreeMap<String, String>) -> String {
    let joined = params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    encode_oauth(&joined)
}

/// Decode `%XX` escapes and `+`-as-space in a query component. Malformed
/// escapes pass through untouched.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3);
                match hex.and_then(|h| u8::from_str_radix(std::str::from_utf8(h).ok()?, 16).ok()) {
                    Some(decoded) => {
                        out.push(decoded);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
