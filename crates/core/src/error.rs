//! Errors raised while building operations from runtime input.

/// Errors that can occur when building an operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// No table or view with this name.
    #[error("unknown table `{0}`")]
    UnknownTable(String),
    /// The table has no relationship with this name.
    #[error("table `{table}` has no relationship `{name}`")]
    UnknownRelationship {
        /// Table the relationship was looked up on.
        table: &'static str,
        /// Requested relationship field.
        name: String,
    },
    /// The root field does not exist for this table (mutations on a view,
    /// `_by_pk` on a table without primary key).
    #[error("`{field}` is not available on `{table}`")]
    Unavailable {
        /// Table the operation targets.
        table: &'static str,
        /// Root field that was requested.
        field: String,
    },
    /// The operation name is not one of the known root field kinds.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    /// Variables are not a JSON object, or miss a required argument.
    #[error("invalid variables: {0}")]
    InvalidVariables(String),
}
