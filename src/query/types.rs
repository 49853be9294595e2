//! SuiteQL response shapes

use crate::error::{Error, ErrorDetail, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Wire shape of one paginated query response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    links: Vec<RawLink>,
    count: u64,
    has_more: bool,
    offset: u64,
    total_results: u64,
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    rel: String,
    href: String,
}

/// One fetched page of a paginated SuiteQL result.
///
/// Immutable once parsed. Items are opaque record objects, passed through
/// in server order.
#[derive(Debug, Clone)]
pub struct QueryPage {
    /// HTTP status the page arrived with
    pub status: u16,
    /// Relation name to URL, collected from the `links` array
    pub links: HashMap<String, String>,
    /// Item count reported by the server
    pub count: u64,
    /// Whether another page follows
    pub has_more: bool,
    /// Offset of this page within the full result set
    pub offset: u64,
    /// Total rows the query matched
    pub total_results: u64,
    /// Records on this page, in server order
    pub items: Vec<Value>,
}

impl QueryPage {
    /// Parse an OK response body into a page.
    ///
    /// A missing or malformed required field (`links`, `count`, `hasMore`,
    /// `offset`, `totalResults`) is a protocol error. This only constructs
    /// data or returns an error value; diagnostics belong to the caller.
    pub fn parse(status: u16, body: Value) -> Result<Self> {
        let raw: RawPage = serde_json::from_value(body)
            .map_err(|e| Error::protocol(format!("malformed query response: {e}")))?;

        let links = raw
            .links
            .into_iter()
            .map(|link| (link.rel, link.href))
            .collect();

        Ok(Self {
            status,
            links,
            count: raw.count,
            has_more: raw.has_more,
            offset: raw.offset,
            total_results: raw.total_results,
            items: raw.items,
        })
    }

    /// A "no content" page: zero items and no further pages, by convention
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            links: HashMap::new(),
            count: 0,
            has_more: false,
            offset: 0,
            total_results: 0,
            items: Vec::new(),
        }
    }

    /// URL of the next page, when the server supplied one
    pub fn next_link(&self) -> Option<&str> {
        self.links.get("next").map(String::as_str)
    }
}

/// Extract the structured error detail from a non-2xx response body.
///
/// NetSuite error bodies look like `{title, type, status,
/// "o:errorDetails": [{detail, ...}]}`; absent fields default rather than
/// fail, since error bodies are for reporting only.
pub fn error_detail_from_body(status: u16, body: &Value) -> ErrorDetail {
    ErrorDetail {
        title: string_field(body, "title"),
        error_type: string_field(body, "type"),
        status: body
            .get("status")
            .and_then(Value::as_u64)
            .map_or(status, |s| s as u16),
        detail: body
            .get("o:errorDetails")
            .and_then(Value::as_array)
            .and_then(|details| details.first())
            .map(|entry| string_field(entry, "detail"))
            .unwrap_or_default(),
    }
}

fn string_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
