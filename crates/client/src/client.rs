//! HTTP client for queries and mutations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use graphql_client::Response;
use moka::future::Cache;
use paygraph_core::introspection::{self, Drift, INTROSPECTION_QUERY, IntrospectionData, Schema};
use paygraph_core::operation::RootData;
use paygraph_core::{Operation, OperationKind};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::error::{GraphError, GraphQLError};

pub(crate) const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";
pub(crate) const ROLE_HEADER: &str = "x-hasura-role";

/// Body of a GraphQL-over-HTTP request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestBody<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: &'a V,
}

// =============================================================================
// GraphClient
// =============================================================================

/// Client for a Hasura GraphQL endpoint.
///
/// Runs any [`Operation`] and decodes its root field. Query results are cached
/// by document and variables; every mutation clears the cache, including
/// results of queries still in flight when it finished.
/// Cloning is cheap and clones share the connection pool and the cache.
#[derive(Clone)]
pub struct GraphClient {
    pub(crate) inner: Arc<GraphClientInner>,
}

pub(crate) struct GraphClientInner {
    client: reqwest::Client,
    endpoint: Url,
    pub(crate) ws_endpoint: Url,
    pub(crate) headers: HeaderMap,
    cache: Cache<String, Value>,
    /// Bumped whenever the cache is cleared. A query only keeps its cached
    /// result if no clear happened while it was in flight.
    generation: AtomicU64,
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("ws_endpoint", &self.inner.ws_endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, GraphError> {
        let headers = auth_headers(config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers.clone())
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(GraphClientInner {
                client,
                endpoint: config.endpoint.clone(),
                ws_endpoint: config.ws_endpoint.clone(),
                headers,
                cache,
                generation: AtomicU64::new(0),
            }),
        })
    }

    /// Create a client from `PAYGRAPH_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is missing or invalid.
    pub fn from_env() -> Result<Self, GraphError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Run a query or mutation and decode its root field.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Transport`] for subscriptions, and otherwise an
    /// error if the request fails, the endpoint reports GraphQL errors or the
    /// result does not decode into `O::Output`.
    #[instrument(skip_all, fields(operation = %op.operation_name()))]
    pub async fn execute<O: Operation>(&self, op: &O) -> Result<O::Output, GraphError> {
        let kind = op.kind();
        if kind == OperationKind::Subscription {
            return Err(GraphError::Transport {
                operation: op.operation_name(),
                kind,
                transport: "HTTP",
            });
        }

        let document = op.document();
        let name = op.operation_name();
        let body = RequestBody {
            query: &document,
            operation_name: &name,
            variables: op.variables(),
        };

        if kind == OperationKind::Mutation {
            // A failed request may still have committed
            let data = self.post(&body).await;
            self.clear_cache();
            return decode_root(data?);
        }

        let cache_key = serde_json::to_string(&body)?;
        if let Some(data) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for query");
            return decode_root(data);
        }

        let generation = self.inner.generation.load(Ordering::SeqCst);
        let data = self.post(&body).await?;
        self.inner.cache.insert(cache_key.clone(), data.clone()).await;
        // Checked after the insert: a clear racing with it either sees the
        // entry or has already bumped the generation.
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!("Cache cleared while query was in flight");
            self.inner.cache.invalidate(&cache_key).await;
        }
        decode_root(data)
    }

    /// Run a query whose root field may be `null`, failing with
    /// [`GraphError::NotFound`] if it is.
    ///
    /// # Errors
    ///
    /// Returns an error if [`execute`](Self::execute) fails or no row matched.
    pub async fn fetch_one<O, T>(&self, op: &O) -> Result<T, GraphError>
    where
        O: Operation<Output = Option<T>>,
    {
        self.execute(op)
            .await?
            .ok_or_else(|| GraphError::NotFound(op.field_name()))
    }

    /// Fetch the live schema via introspection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint has
    /// introspection disabled.
    #[instrument(skip(self))]
    pub async fn introspect(&self) -> Result<Schema, GraphError> {
        let variables = serde_json::Map::new();
        let body = RequestBody {
            query: INTROSPECTION_QUERY,
            operation_name: "Introspection",
            variables: &variables,
        };
        let data = self.post(&body).await?;
        let data: IntrospectionData = serde_json::from_value(data)?;
        Ok(data.schema)
    }

    /// Compare the live schema against the table catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if introspection fails.
    pub async fn verify(&self) -> Result<Vec<Drift>, GraphError> {
        let schema = self.introspect().await?;
        Ok(introspection::verify(&schema))
    }

    /// Drop every cached query result, and keep queries in flight from
    /// caching theirs.
    pub fn clear_cache(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.cache.invalidate_all();
    }

    /// POST a request and return its `data` object.
    async fn post<V: Serialize>(&self, body: &RequestBody<'_, V>) -> Result<Value, GraphError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(GraphError::RateLimited(retry_after));
        }

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&response_text, 500),
                "GraphQL endpoint returned non-success status"
            );
            return Err(GraphError::GraphQL(vec![GraphQLError::message(format!(
                "HTTP {status}: {}",
                truncate(&response_text, 200)
            ))]));
        }

        let response: Response<Value> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %truncate(&response_text, 500),
                    "Failed to parse GraphQL response"
                );
                return Err(GraphError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(GraphError::GraphQL(
                errors.into_iter().map(GraphQLError::from).collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %truncate(&response_text, 500),
                "GraphQL response has no data and no errors"
            );
            GraphError::GraphQL(vec![GraphQLError::message("No data in response")])
        })
    }
}

/// Decode the aliased root field out of a `data` object.
pub(crate) fn decode_root<T: DeserializeOwned>(data: Value) -> Result<T, GraphError> {
    let root: RootData<T> = serde_json::from_value(data)?;
    Ok(root.result)
}

/// Headers carrying the configured credentials.
fn auth_headers(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    if let Some(secret) = &config.admin_secret {
        insert_header(
            &mut headers,
            HeaderName::from_static(ADMIN_SECRET_HEADER),
            secret.expose_secret(),
            "PAYGRAPH_ADMIN_SECRET",
            true,
        )?;
    }
    if let Some(role) = &config.role {
        insert_header(
            &mut headers,
            HeaderName::from_static(ROLE_HEADER),
            role,
            "PAYGRAPH_ROLE",
            false,
        )?;
    }
    if let Some(token) = &config.bearer_token {
        insert_header(
            &mut headers,
            AUTHORIZATION,
            &format!("Bearer {}", token.expose_secret()),
            "PAYGRAPH_BEARER_TOKEN",
            true,
        )?;
    }
    Ok(headers)
}

fn insert_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: &str,
    var: &str,
    sensitive: bool,
) -> Result<(), ConfigError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;
    value.set_sensitive(sensitive);
    headers.insert(name, value);
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
