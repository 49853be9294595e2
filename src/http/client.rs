//! Signed HTTP request wrappers
//!
//! Thin plumbing over `reqwest`: each call signs the (method, URL) pair,
//! merges headers per the NetSuite client contract, and hands the request
//! to the transport. Transport policy (TLS, pooling, timeouts) stays with
//! `reqwest`; this layer adds no retries of its own.

use crate::auth::{Credentials, OauthSigner};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Caller-supplied header overrides for a single request.
///
/// When present, these replace every default header; the `Authorization`
/// value is always regenerated for the request and injected regardless.
pub type HeaderOverrides = HashMap<String, String>;

/// Signed client for the SuiteTalk REST record and query services.
pub struct RestClient {
    client: Client,
    signer: OauthSigner,
}

impl RestClient {
    /// Create a client with a default transport
    pub fn new(credentials: Credentials) -> Self {
        Self::with_client(credentials, Client::new())
    }

    /// Create a client reusing an existing `reqwest` transport
    pub fn with_client(credentials: Credentials, client: Client) -> Self {
        Self {
            client,
            signer: OauthSigner::new(credentials),
        }
    }

    /// Get the request signer
    pub fn signer(&self) -> &OauthSigner {
        &self.signer
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a signed GET request
    pub async fn get(&self, url: &str, headers: Option<HeaderOverrides>) -> Result<Response> {
        self.request(Method::GET, url, headers, None).await
    }

    /// Make a signed POST request
    pub async fn post(
        &self,
        url: &str,
        body: Value,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.request(Method::POST, url, headers, Some(body)).await
    }

    /// Make a signed PUT request
    pub async fn put(
        &self,
        url: &str,
        body: Value,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.request(Method::PUT, url, headers, Some(body)).await
    }

    /// Make a signed PATCH request
    pub async fn patch(
        &self,
        url: &str,
        body: Value,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.request(Method::PATCH, url, headers, Some(body)).await
    }

    /// Make a signed DELETE request
    pub async fn delete(&self, url: &str, headers: Option<HeaderOverrides>) -> Result<Response> {
        self.request(Method::DELETE, url, headers, None).await
    }

    /// Make a signed request with any method.
    ///
    /// GET and HEAD never carry a body. The response is returned as-is;
    /// status classification is the caller's concern.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Option<HeaderOverrides>,
        body: Option<Value>,
    ) -> Result<Response> {
        let merged = self.merge_headers(method.as_str(), url, headers)?;

        let mut req = self
            .client
            .request(method.clone(), url)
            .headers(build_header_map(&merged)?);

        // Serialize the body ourselves so the merged Content-Type header
        // is the one that goes out on the wire
        if !matches!(method, Method::GET | Method::HEAD) {
            if let Some(ref body) = body {
                req = req.body(serde_json::to_vec(body)?);
            }
        }

        let response = req.send().await.map_err(Error::Http)?;
        debug!(%method, url, status = %response.status(), "request dispatched");
        Ok(response)
    }

    /// Merge caller headers with the signed defaults.
    ///
    /// With overrides: caller headers win, except `Authorization` which is
    /// always freshly computed for this method+URL pair. Without: the full
    /// default bundle (`Prefer`, `Content-Type`, `Authorization`,
    /// `cache-control`).
    fn merge_headers(
        &self,
        method: &str,
        url: &str,
        overrides: Option<HeaderOverrides>,
    ) -> Result<HashMap<String, String>> {
        match overrides {
            Some(mut headers) => {
                headers.insert(
                    "Authorization".to_string(),
                    self.signer.authorization(method, url)?,
                );
                Ok(headers)
            }
            None => self.signer.default_headers(method, url),
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

/// Convert a string header map into a typed `HeaderMap`, rejecting names
/// or values the wire format cannot carry.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::invalid_header(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::invalid_header(format!("{name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
