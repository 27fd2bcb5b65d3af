//! Live queries and streaming subscriptions over `graphql-transport-ws`.

use std::marker::PhantomData;

use async_tungstenite::tungstenite::client::IntoClientRequest;
use async_tungstenite::tungstenite::http::HeaderValue;
use async_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use graphql_client::Response;
use paygraph_core::operation::RootData;
use paygraph_core::{Operation, OperationKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::client::GraphClient;
use crate::error::{GraphError, GraphQLError};

const SUBPROTOCOL: &str = "graphql-transport-ws";

/// Stream of decoded root fields, one item per `next` message.
pub type SubscriptionStream<T> = BoxStream<'static, Result<T, GraphError>>;

/// `subscribe` message payload for one operation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionRequest<T> {
    query: String,
    operation_name: String,
    variables: Value,
    #[serde(skip)]
    output: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned + Send + 'static> graphql_ws_client::graphql::GraphqlOperation
    for SubscriptionRequest<T>
{
    type Response = Result<T, GraphError>;
    type Error = serde_json::Error;

    fn decode(&self, data: Value) -> Result<Self::Response, Self::Error> {
        let response: Response<RootData<T>> = serde_json::from_value(data)?;
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Ok(Err(GraphError::GraphQL(
                errors.into_iter().map(GraphQLError::from).collect(),
            )));
        }
        Ok(response.data.map_or_else(
            || {
                Err(GraphError::GraphQL(vec![GraphQLError::message(
                    "No data in subscription event",
                )]))
            },
            |root| Ok(root.result),
        ))
    }
}

impl GraphClient {
    /// Open a WebSocket and run a subscription.
    ///
    /// Read builders must be switched over with `.subscribe()` first;
    /// `SelectStream` always is. Credentials go in the `connection_init`
    /// payload. Dropping the stream closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Transport`] for queries and mutations, and
    /// otherwise an error if the handshake or the `connection_init`
    /// exchange fails.
    #[instrument(skip_all, fields(operation = %op.operation_name()))]
    pub async fn subscribe<O>(&self, op: &O) -> Result<SubscriptionStream<O::Output>, GraphError>
    where
        O: Operation,
        O::Output: Send + 'static,
    {
        let kind = op.kind();
        if kind != OperationKind::Subscription {
            return Err(GraphError::Transport {
                operation: op.operation_name(),
                kind,
                transport: "a WebSocket",
            });
        }

        let request = SubscriptionRequest::<O::Output> {
            query: op.document(),
            operation_name: op.operation_name(),
            variables: serde_json::to_value(op.variables())?,
            output: PhantomData,
        };

        let mut ws_request = self.inner.ws_endpoint.as_str().into_client_request()?;
        ws_request
            .headers_mut()
            .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(SUBPROTOCOL));

        let (connection, _) = async_tungstenite::tokio::connect_async(ws_request).await?;
        debug!(endpoint = %self.inner.ws_endpoint, "WebSocket connected");

        let stream = graphql_ws_client::Client::build(connection)
            .payload(self.init_payload())?
            .subscribe(request)
            .await?;

        Ok(stream
            .map(|item| item.map_err(GraphError::from).and_then(|decoded| decoded))
            .boxed())
    }

    /// `connection_init` payload: `{"headers": {...}}` with the credentials
    /// the HTTP client sends.
    pub(crate) fn init_payload(&self) -> Value {
        let headers: Map<String, Value> = self
            .inner
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), Value::String(v.to_string())))
            })
            .collect();
        let mut payload = Map::new();
        payload.insert("headers".to_string(), Value::Object(headers));
        Value::Object(payload)
    }
}
