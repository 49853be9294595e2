//! SuiteQL query driver
//!
//! Runs a query against the paginated SuiteQL endpoint and follows the
//! server-supplied `next` links until the result set is exhausted.

use super::types::{error_detail_from_body, QueryPage};
use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HeaderOverrides, RestClient};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, error};

/// Routing cookie NetSuite expects on SuiteQL requests
const ROUTING_COOKIE: &str = "NS_ROUTING_VERSION=LAGGING";

/// Client for the SuiteQL query service of one NetSuite account.
#[derive(Debug)]
pub struct SuiteQlClient {
    rest: RestClient,
    url: String,
}

impl SuiteQlClient {
    /// Create a client targeting the account's standard SuiteQL endpoint
    pub fn new(credentials: Credentials) -> Self {
        let url = format!(
            "https://{}.suitetalk.api.netsuite.com/services/rest/query/v1/suiteql",
            credentials.realm
        );
        Self {
            rest: RestClient::new(credentials),
            url,
        }
    }

    /// Override the query endpoint URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Get the initial query endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the underlying signed REST client
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Run a query to completion and return every row, in fetch order.
    ///
    /// Issues a signed POST with body `{"q": <query>}` to the endpoint,
    /// then follows each page's `next` link while `hasMore` is true. Items
    /// are concatenated in the order pages arrive; within a page, server
    /// order is preserved.
    ///
    /// A non-OK page is a hard stop, not an error: the remote detail is
    /// logged and an **empty** result is returned, discarding rows from
    /// earlier pages. Callers must not read an empty result as "no data"
    /// without checking logs. To observe the failure directly, drive
    /// [`fetch_page`](Self::fetch_page), which returns `Err(Error::Remote)`
    /// for a non-OK page. Transport failures propagate as errors.
    pub async fn run_query(&self, query: &str) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut next_url = self.url.clone();
        let mut pages_fetched = 0u32;

        loop {
            let page = match self.fetch_page(&next_url, query).await {
                Ok(page) => page,
                Err(Error::Remote(detail)) => {
                    error!(%detail, pages_fetched, "query aborted on non-OK page");
                    return Ok(Vec::new());
                }
                Err(other) => return Err(other),
            };
            pages_fetched += 1;

            debug!(
                pages_fetched,
                count = page.items.len(),
                has_more = page.has_more,
                total_results = page.total_results,
                "fetched query page"
            );

            let has_more = page.has_more;
            let next = page.next_link().map(str::to_string);
            items.extend(page.items);

            if !has_more {
                return Ok(items);
            }
            next_url =
                next.ok_or_else(|| Error::protocol("page reported hasMore without a next link"))?;
        }
    }

    /// Fetch and parse a single page of query results.
    ///
    /// Returns `Err(Error::Remote)` with the parsed error detail for a
    /// non-OK response; a 204 yields an empty final page.
    pub async fn fetch_page(&self, url: &str, query: &str) -> Result<QueryPage> {
        let response = self
            .rest
            .post(url, json!({ "q": query }), Some(self.query_headers()))
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(Error::Remote(error_detail_from_body(
                status.as_u16(),
                &body,
            )));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(QueryPage::empty(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(Error::Http)?;
        QueryPage::parse(status.as_u16(), body)
    }

    /// Headers for a SuiteQL request: the default bundle plus the routing
    /// cookie. `Authorization` is injected by the REST layer.
    fn query_headers(&self) -> HeaderOverrides {
        let mut headers = HashMap::new();
        headers.insert("Prefer".to_string(), "transient".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("cache-control".to_string(), "no-cache".to_string());
        headers.insert("Cookie".to_string(), ROUTING_COOKIE.to_string());
        headers
    }
}
