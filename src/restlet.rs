//! RESTlet endpoint addressing
//!
//! Deployed RESTlet scripts are called through the account-scoped restlet
//! domain and identified by `script` and `deploy` query parameters. Both
//! parameters take part in the OAuth signature like any other query
//! parameter. RESTlets accept GET, POST, PUT, and DELETE only.

use crate::auth::Credentials;
use crate::error::Result;
use crate::http::{HeaderOverrides, RestClient};
use reqwest::Response;
use serde_json::Value;

/// Signed client for a NetSuite account's RESTlet domain.
#[derive(Debug)]
pub struct RestletClient {
    rest: RestClient,
    base_url: String,
}

impl RestletClient {
    /// Create a client targeting the account-specific restlet domain
    pub fn new(credentials: Credentials) -> Self {
        let base_url = format!(
            "https://{}.restlets.api.netsuite.com/app/site/hosting/restlet.nl",
            credentials.realm
        );
        Self {
            rest: RestClient::new(credentials),
            base_url,
        }
    }

    /// Override the restlet base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL for a script/deployment pair
    pub fn endpoint(&self, script: &str, deploy: &str) -> String {
        format!("{}?script={script}&deploy={deploy}", self.base_url)
    }

    /// Call a RESTlet entry point with GET
    pub async fn get(
        &self,
        script: &str,
        deploy: &str,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.rest.get(&self.endpoint(script, deploy), headers).await
    }

    /// Call a RESTlet entry point with POST
    pub async fn post(
        &self,
        script: &str,
        deploy: &str,
        body: Value,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.rest
            .post(&self.endpoint(script, deploy), body, headers)
            .await
    }

    /// Call a RESTlet entry point with PUT
    pub async fn put(
        &self,
        script: &str,
        deploy: &str,
        body: Value,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.rest
            .put(&self.endpoint(script, deploy), body, headers)
            .await
    }

    /// Call a RESTlet entry point with DELETE
    pub async fn delete(
        &self,
        script: &str,
        deploy: &str,
        headers: Option<HeaderOverrides>,
    ) -> Result<Response> {
        self.rest
            .delete(&self.endpoint(script, deploy), headers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials::new("123456", "ck", "cs", "tk", "ts")
    }

    #[test]
    fn test_endpoint_url() {
        let client = RestletClient::new(credentials());
        assert_eq!(
            client.endpoint("customscript_example", "customdeploy_example"),
            "https://123456.restlets.api.netsuite.com/app/site/hosting/restlet.nl\
             ?script=customscript_example&deploy=customdeploy_example"
        );
    }

    #[tokio::test]
    async fn test_get_signs_script_and_deploy_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/site/hosting/restlet.nl"))
            .and(query_param("script", "123"))
            .and(query_param("deploy", "1"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RestletClient::new(credentials()).with_base_url(format!(
            "{}/app/site/hosting/restlet.nl",
            mock_server.uri()
        ));
        let response = client.get("123", "1", None).await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_post_sends_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app/site/hosting/restlet.nl"))
            .and(query_param("script", "123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RestletClient::new(credentials()).with_base_url(format!(
            "{}/app/site/hosting/restlet.nl",
            mock_server.uri()
        ));
        client
            .post("123", "1", serde_json::json!({"action": "run"}), None)
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["action"], "run");
    }
}
