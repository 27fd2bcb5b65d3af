//! Introspection drift check against the mocked endpoint.

#![allow(clippy::unwrap_used)]

use paygraph_client::GraphError;
use paygraph_core::introspection::{Drift, catalog_introspection};
use paygraph_integration_tests::MockHasura;
use serde_json::json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_matching_schema_has_no_drift() {
    let hasura = MockHasura::start().await;
    hasura.respond("Introspection", catalog_introspection(), 1).await;

    let drift = hasura.client().verify().await.unwrap();
    assert_eq!(drift, Vec::<Drift>::new());

    let bodies = hasura.request_bodies().await;
    assert!(bodies[0]["query"].as_str().unwrap().contains("__schema"));
    assert_eq!(bodies[0]["variables"], json!({}));
}

#[tokio::test]
async fn test_dropped_column_is_reported() {
    let hasura = MockHasura::start().await;
    let mut schema = catalog_introspection();
    let types = schema["__schema"]["types"].as_array_mut().unwrap();
    let wallet_user = types.iter_mut().find(|t| t["name"] == "wallet_user").unwrap();
    let first_field = wallet_user["fields"].as_array_mut().unwrap().remove(0);
    hasura.respond("Introspection", schema, 1).await;

    let drift = hasura.client().verify().await.unwrap();
    assert_eq!(
        drift,
        [Drift::MissingField {
            type_name: "wallet_user".to_string(),
            field: first_field["name"].as_str().unwrap().to_string(),
        }]
    );
}

#[tokio::test]
async fn test_introspection_disabled() {
    let hasura = MockHasura::start().await;
    MockHasura::operation("Introspection")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{
                "message": "introspection is disabled",
                "extensions": {"code": "validation-failed"}
            }]
        })))
        .mount(&hasura.server)
        .await;

    let err = hasura.client().introspect().await.unwrap_err();
    assert!(matches!(err, GraphError::GraphQL(_)));
}
