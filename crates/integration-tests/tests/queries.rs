//! Reads: request shape, decoding, caching.

#![allow(clippy::unwrap_used)]

use paygraph_client::GraphError;
use paygraph_core::root::FieldKind;
use paygraph_core::tables::checkout::{self, Checkout, PkColumnsInput};
use paygraph_core::{
    ComparisonExp, DynamicOperation, Operation, Select, SelectAggregate, SelectByPk,
};
use paygraph_integration_tests::{ADMIN_SECRET, MockHasura, checkout_row};
use serde_json::json;
use uuid::Uuid;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;

const CHECKOUT_ID: &str = "6f1c7d1e-59a4-4c55-9a9a-0c3f2f1b8f11";

#[tokio::test]
async fn test_select_sends_document_and_set_variables_only() {
    let hasura = MockHasura::start().await;
    hasura
        .respond("Checkout", json!({"result": [checkout_row(CHECKOUT_ID, "Genesis drop")]}), 1)
        .await;

    let op = Select::<Checkout>::new()
        .filter(checkout::BoolExp {
            is_archived: Some(ComparisonExp::eq(false)),
            ..Default::default()
        })
        .limit(5);
    let rows = hasura.client().execute(&op).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title.as_deref(), Some("Genesis drop"));
    assert_eq!(rows[0].total_supply, Some(1000));
    assert!(rows[0].seller.is_none());

    let bodies = hasura.request_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["query"], op.document());
    assert_eq!(bodies[0]["operationName"], "Checkout");
    assert_eq!(
        bodies[0]["variables"],
        json!({"limit": 5, "where": {"is_archived": {"_eq": false}}})
    );
}

#[tokio::test]
async fn test_credentials_are_sent_as_headers() {
    let hasura = MockHasura::start().await;
    MockHasura::operation("Checkout")
        .and(header("x-hasura-admin-secret", ADMIN_SECRET))
        .and(header("x-hasura-role", "seller"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"result": []}})))
        .expect(1)
        .mount(&hasura.server)
        .await;

    let mut config = hasura.config();
    config.role = Some("seller".to_string());
    let client = paygraph_client::GraphClient::new(&config).unwrap();

    let rows = client.execute(&Select::<Checkout>::new()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_by_pk_with_relationship() {
    let hasura = MockHasura::start().await;
    let mut row = checkout_row(CHECKOUT_ID, "Genesis drop");
    row["seller"] = json!({
        "company_name": "Paygraph Labs",
        "created_at": "2024-01-02T00:00:00+00:00",
        "email": "ops@paygraph.dev",
        "id": "0d5f7a52-3b1e-4e0c-9a55-1c4b8f5e2a10",
        "name": "Paygraph",
        "stripe_account_id": null,
        "support_email": null,
        "fee_bps": 250,
        "branding": null,
        "is_test_mode": false
    });
    hasura.respond("CheckoutByPk", json!({"result": row}), 1).await;

    let op = SelectByPk::<Checkout>::new(PkColumnsInput {
        id: CHECKOUT_ID.parse::<Uuid>().unwrap(),
    })
    .with("seller")
    .unwrap();
    let checkout = hasura.client().fetch_one(&op).await.unwrap();

    assert_eq!(checkout.id.to_string(), CHECKOUT_ID);
    let seller = checkout.seller.unwrap();
    assert_eq!(seller.fee_bps, 250);

    let bodies = hasura.request_bodies().await;
    assert_eq!(bodies[0]["variables"], json!({"id": CHECKOUT_ID}));
    assert!(bodies[0]["query"].as_str().unwrap().contains("seller {"));
}

#[tokio::test]
async fn test_missing_row_is_none_or_not_found() {
    let hasura = MockHasura::start().await;
    hasura.respond("CheckoutByPk", json!({"result": null}), 1).await;

    let op = SelectByPk::<Checkout>::new(PkColumnsInput { id: Uuid::nil() });
    let client = hasura.client();
    assert_eq!(client.execute(&op).await.unwrap(), None);

    // served from the cache
    let err = client.fetch_one(&op).await.unwrap_err();
    assert!(matches!(err, GraphError::NotFound(field) if field == "checkout_by_pk"));
}

#[tokio::test]
async fn test_aggregate_decodes_stats() {
    let hasura = MockHasura::start().await;
    hasura
        .respond(
            "CheckoutAggregate",
            json!({"result": {
                "aggregate": {
                    "count": 3,
                    "avg": {"limit_per_transaction": 2.5, "limit_per_wallet": null, "total_supply": 400.0},
                    "max": {"created_at": "2024-05-01T09:30:00+00:00", "total_supply": 1000},
                    "sum": {"total_supply": 1200}
                },
                "nodes": []
            }}),
            1,
        )
        .await;

    let aggregate = hasura
        .client()
        .execute(&SelectAggregate::<Checkout>::new())
        .await
        .unwrap();

    assert_eq!(aggregate.count(), Some(3));
    let fields = aggregate.aggregate.unwrap();
    assert_eq!(fields.avg.unwrap().limit_per_transaction, Some(2.5));
    assert_eq!(fields.sum.unwrap().total_supply, Some(1200));
    assert_eq!(fields.max.unwrap().total_supply, Some(1000));
}

#[tokio::test]
async fn test_repeated_query_is_cached() {
    let hasura = MockHasura::start().await;
    hasura
        .respond("Checkout", json!({"result": [checkout_row(CHECKOUT_ID, "Cached")]}), 3)
        .await;

    let client = hasura.client();
    let op = Select::<Checkout>::new().limit(1);
    let first = client.execute(&op).await.unwrap();
    let second = client.clone().execute(&op).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(hasura.request_bodies().await.len(), 1);

    // different variables are a different cache entry
    client.execute(&op.clone().limit(2)).await.unwrap();
    assert_eq!(hasura.request_bodies().await.len(), 2);

    client.clear_cache();
    client.execute(&op).await.unwrap();
    assert_eq!(hasura.request_bodies().await.len(), 3);
}

#[tokio::test]
async fn test_dynamic_operation_returns_json() {
    let hasura = MockHasura::start().await;
    hasura
        .respond(
            "AnalyticsSellerRevenue",
            json!({"result": [{
                "currency": "USD",
                "month": "2024-05-01",
                "seller_id": "0d5f7a52-3b1e-4e0c-9a55-1c4b8f5e2a10",
                "gross_revenue": "1250.00",
                "net_revenue": "1218.75",
                "refunded": "0",
                "transaction_count": 50
            }]}),
            1,
        )
        .await;

    let op = DynamicOperation::new(
        "analytics_seller_revenue",
        FieldKind::Select,
        json!({"order_by": [{"month": "desc"}], "limit": 12}),
    )
    .unwrap();
    let rows = hasura.client().execute(&op).await.unwrap();

    assert_eq!(rows[0]["transaction_count"], 50);
    let bodies = hasura.request_bodies().await;
    assert_eq!(
        bodies[0]["variables"],
        json!({"order_by": [{"month": "desc"}], "limit": 12})
    );
}
