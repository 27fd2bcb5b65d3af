//! Integration tests for the paygraph client.
//!
//! Every test runs `GraphClient` against a `wiremock` server standing in for
//! Hasura, so no live endpoint is needed:
//!
//! ```bash
//! cargo test -p paygraph-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `queries` - typed and dynamic reads, request shape, headers
//! - `mutations` - inserts, updates, deletes and cache invalidation
//! - `errors` - GraphQL errors, HTTP failures, rate limiting
//! - `verify` - introspection drift check

use paygraph_client::{ClientConfig, GraphClient};
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock endpoint serves GraphQL on.
pub const GRAPHQL_PATH: &str = "/v1/graphql";

/// Admin secret the test client is configured with.
pub const ADMIN_SECRET: &str = "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6";

/// A mocked Hasura endpoint.
pub struct MockHasura {
    pub server: MockServer,
}

impl MockHasura {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Client configuration pointing at the mock, with the admin secret set.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        let endpoint = format!("{}{GRAPHQL_PATH}", self.server.uri())
            .parse()
            .expect("mock server URI is a valid URL");
        let mut config = ClientConfig::new(endpoint).expect("mock server URI is http");
        config.admin_secret = Some(SecretString::from(ADMIN_SECRET));
        config
    }

    /// A fresh client (with its own cache) for the mock.
    #[must_use]
    pub fn client(&self) -> GraphClient {
        GraphClient::new(&self.config()).expect("client builds")
    }

    /// Mock matching POSTs of the operation named `operation_name`.
    #[must_use]
    pub fn operation(operation_name: &str) -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_partial_json(json!({ "operationName": operation_name })))
    }

    /// Answer `operation_name` with `{"data": data}`, expecting `calls` requests.
    pub async fn respond(&self, operation_name: &str, data: Value, calls: u64) {
        Self::operation(operation_name)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far.
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.body_json::<Value>().expect("request body is JSON"))
            .collect()
    }
}

/// A `checkout` row as Hasura returns it.
#[must_use]
pub fn checkout_row(id: &str, title: &str) -> Value {
    json!({
        "cancel_callback_url": null,
        "contract_id": null,
        "created_at": "2024-05-01T09:30:00+00:00",
        "description": null,
        "id": id,
        "image_url": "https://cdn.paygraph.dev/drop.png",
        "seller_id": "0d5f7a52-3b1e-4e0c-9a55-1c4b8f5e2a10",
        "success_callback_url": null,
        "title": title,
        "updated_at": null,
        "limit_per_transaction": 5,
        "limit_per_wallet": null,
        "total_supply": 1000,
        "contract_args": null,
        "mint_method": {"name": "mintTo", "args": {"to": "$WALLET"}},
        "price": {"amount": "25.00", "currency": "USD"},
        "hide_quantity_input": false,
        "is_archived": false,
        "redirect_after_payment": null
    })
}
