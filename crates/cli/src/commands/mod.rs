//! Subcommand implementations.

pub mod catalog;
pub mod query;

use paygraph_client::GraphError;
use paygraph_core::OperationError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A JSON argument did not parse.
    #[error("--{arg} is not valid JSON: {source}")]
    InvalidJson {
        arg: &'static str,
        source: serde_json::Error,
    },

    /// The operation could not be built.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// The request failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// JSON output failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML output failed.
    #[error("YAML output error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The live schema differs from the catalog.
    #[error("live schema differs from the catalog in {0} place(s)")]
    Drift(usize),
}

/// Parse the value of a `--<arg>` JSON option.
pub fn parse_json(arg: &'static str, raw: &str) -> Result<Value, CommandError> {
    serde_json::from_str(raw).map_err(|source| CommandError::InvalidJson { arg, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json() {
        assert_eq!(
            parse_json("where", r#"{"id": {"_eq": 1}}"#).unwrap(),
            json!({"id": {"_eq": 1}})
        );
        let err = parse_json("where", "{id: 1}").unwrap_err();
        assert!(err.to_string().starts_with("--where is not valid JSON"));
    }
}
