//! Errors returned by [`GraphClient`](crate::GraphClient).

use paygraph_core::{OperationError, OperationKind};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when talking to the Hasura endpoint.
#[derive(Debug, Error)]
pub enum GraphError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL request returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Row not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the endpoint.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// WebSocket handshake failed.
    #[error("WebSocket handshake failed: {0}")]
    Handshake(Box<async_tungstenite::tungstenite::Error>),

    /// The `graphql-transport-ws` session failed.
    #[error("Subscription error: {0}")]
    WebSocket(#[from] graphql_ws_client::Error),

    /// Operation sent over the wrong transport.
    #[error("{operation} is a {kind} and cannot be sent over {transport}")]
    Transport {
        operation: String,
        kind: OperationKind,
        transport: &'static str,
    },

    /// Operation could not be built.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Client configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<async_tungstenite::tungstenite::Error> for GraphError {
    fn from(error: async_tungstenite::tungstenite::Error) -> Self {
        Self::Handshake(Box::new(error))
    }
}

/// A GraphQL error returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
    /// `extensions.code`, e.g. `validation-failed` or `constraint-violation`.
    pub code: Option<String>,
}

/// Location in a GraphQL document where an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

impl GraphQLError {
    /// An error with only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            code: None,
        }
    }
}

impl From<graphql_client::Error> for GraphQLError {
    fn from(error: graphql_client::Error) -> Self {
        let code = error
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);
        Self {
            message: error.message,
            locations: error.locations.map_or_else(Vec::new, |locs| {
                locs.into_iter()
                    .map(|l| GraphQLErrorLocation {
                        line: i64::from(l.line),
                        column: i64::from(l.column),
                    })
                    .collect()
            }),
            path: error.path.map_or_else(Vec::new, |p| {
                p.into_iter()
                    .map(|fragment| match fragment {
                        graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                        graphql_client::PathFragment::Index(i) => {
                            serde_json::Value::Number(i.into())
                        }
                    })
                    .collect()
            }),
            code,
        }
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if let Some(code) = &e.code {
                parts.push(format!("[{code}]"));
            }

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graphql_error_formatting() {
        let err = GraphError::GraphQL(vec![
            GraphQLError::message("field 'title' not found in type: 'checkout'"),
            GraphQLError::message("Invalid ID"),
        ]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: field 'title' not found in type: 'checkout'; Invalid ID"
        );
    }

    #[test]
    fn test_graphql_error_with_code_path_and_location() {
        let err = GraphError::GraphQL(vec![GraphQLError {
            message: String::new(),
            locations: vec![GraphQLErrorLocation { line: 5, column: 10 }],
            path: vec![json!("result"), json!(0)],
            code: Some("validation-failed".to_string()),
        }]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: [validation-failed] path: result.0 at line 5:10"
        );
    }

    #[test]
    fn test_graphql_error_no_details() {
        let err = GraphError::GraphQL(vec![GraphQLError::message("")]);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");
        let err = GraphError::GraphQL(vec![]);
        assert_eq!(err.to_string(), "GraphQL errors: (no error details provided)");
    }

    #[test]
    fn test_from_response_error_reads_extension_code() {
        let error: graphql_client::Error = serde_json::from_value(json!({
            "message": "Uniqueness violation. duplicate key value violates unique constraint \"account_email_key\"",
            "extensions": {"path": "$.selectionSet.insert_account_one.args.object", "code": "constraint-violation"}
        }))
        .unwrap();
        let error = GraphQLError::from(error);
        assert_eq!(error.code.as_deref(), Some("constraint-violation"));
        assert!(error.locations.is_empty());
        assert!(error.message.contains("account_email_key"));
    }

    #[test]
    fn test_transport_and_rate_limit_display() {
        let err = GraphError::Transport {
            operation: "CheckoutStream".to_string(),
            kind: OperationKind::Subscription,
            transport: "HTTP",
        };
        assert_eq!(
            err.to_string(),
            "CheckoutStream is a subscription and cannot be sent over HTTP"
        );
        assert_eq!(
            GraphError::RateLimited(60).to_string(),
            "Rate limited, retry after 60 seconds"
        );
    }
}
