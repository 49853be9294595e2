//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: credentials → signed request →
//! paginated SuiteQL responses → accumulated rows.

use serde_json::json;
use suitetalk_client::{Credentials, RestClient, RestletClient, SuiteQlClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new(
        "123456",
        "integration-consumer-key",
        "integration-consumer-secret",
        "integration-token-key",
        "integration-token-secret",
    )
}

// ============================================================================
// Signed REST Flow
// ============================================================================

#[tokio::test]
async fn test_signed_record_roundtrip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/rest/record/v1/customer/42"))
        .and(header("Prefer", "transient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "entityid": "Acme Corp"
        })))
        .mount(&mock_server)
        .await;

    let client = RestClient::new(credentials());
    let url = format!(
        "{}/services/rest/record/v1/customer/42",
        mock_server.uri()
    );
    let response = client.get(&url, None).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["entityid"], "Acme Corp");

    // The transmitted Authorization header is a complete OAuth1 value
    let requests = mock_server.received_requests().await.unwrap();
    let auth = requests[0]
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    for part in [
        "OAuth realm=\"123456\"",
        "oauth_consumer_key=\"integration-consumer-key\"",
        "oauth_token=\"integration-token-key\"",
        "oauth_signature_method=\"HMAC-SHA256\"",
        "oauth_version=\"1.0\"",
        "oauth_timestamp=\"",
        "oauth_nonce=\"",
        "oauth_signature=\"",
    ] {
        assert!(auth.contains(part), "missing {part} in {auth}");
    }
}

#[tokio::test]
async fn test_each_request_is_signed_independently() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/rest/record/v1/job"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = RestClient::new(credentials());
    let url = format!("{}/services/rest/record/v1/job", mock_server.uri());
    client.get(&url, None).await.unwrap();
    client.get(&url, None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let auth_values: Vec<&str> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap()
        })
        .collect();
    // Fresh nonce per call means the headers can never repeat
    assert_ne!(auth_values[0], auth_values[1]);
}

// ============================================================================
// SuiteQL End-to-End
// ============================================================================

#[tokio::test]
async fn test_suiteql_query_end_to_end() {
    let mock_server = MockServer::start().await;
    let query = "SELECT id, tranid FROM transaction WHERE postingperiod = 141";

    let page2_url = format!("{}/suiteql/next", mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/suiteql"))
        .and(body_json(json!({"q": query})))
        .and(header("Cookie", "NS_ROUTING_VERSION=LAGGING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [{"rel": "next", "href": page2_url}],
            "count": 2,
            "hasMore": true,
            "offset": 0,
            "totalResults": 3,
            "items": [
                {"id": "101", "tranid": "INV-1"},
                {"id": "102", "tranid": "INV-2"}
            ],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/suiteql/next"))
        .and(body_json(json!({"q": query})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [],
            "count": 1,
            "hasMore": false,
            "offset": 2,
            "totalResults": 3,
            "items": [{"id": "103", "tranid": "INV-3"}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        SuiteQlClient::new(credentials()).with_url(format!("{}/suiteql", mock_server.uri()));
    let rows = client.run_query(query).await.unwrap();

    let tranids: Vec<&str> = rows.iter().map(|r| r["tranid"].as_str().unwrap()).collect();
    assert_eq!(tranids, vec!["INV-1", "INV-2", "INV-3"]);
}

#[tokio::test]
async fn test_suiteql_failure_returns_empty_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suiteql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "title": "Unauthorized",
            "type": "about:blank",
            "status": 401,
            "o:errorDetails": [{"detail": "Invalid login attempt."}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        SuiteQlClient::new(credentials()).with_url(format!("{}/suiteql", mock_server.uri()));
    let rows = client.run_query("SELECT id FROM customer").await.unwrap();
    assert!(rows.is_empty());
}

// ============================================================================
// RESTlet Flow
// ============================================================================

#[tokio::test]
async fn test_restlet_call_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/app/site/hosting/restlet.nl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handled": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RestletClient::new(credentials()).with_base_url(format!(
        "{}/app/site/hosting/restlet.nl",
        mock_server.uri()
    ));
    let response = client
        .post("customscript_handler", "1", json!({"op": "sync"}), None)
        .await
        .unwrap();

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["handled"], true);
}
