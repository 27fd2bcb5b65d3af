//! Operations on a table chosen at runtime, with JSON variables and output.

use serde_json::{Map, Value};

use super::{FieldKind, Operation, OperationKind, Selection};
use crate::error::OperationError;
use crate::table::TableInfo;
use crate::tables;

/// An operation picked at runtime: table by name, variables as JSON.
///
/// Renders the same document as the typed builder for the same root field
/// and decodes into a plain [`Value`]. Variables are checked against the
/// root field's arguments: unknown keys and missing required arguments are
/// rejected before anything is sent.
#[derive(Debug, Clone)]
pub struct DynamicOperation {
    table: &'static TableInfo,
    field: FieldKind,
    variables: Map<String, Value>,
    selection: Selection,
    nodes: bool,
    subscribe: bool,
}

impl DynamicOperation {
    /// Build the `field` operation on the table or view named `table`.
    ///
    /// `variables` may be `null` (no arguments) or a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown, the table lacks the root
    /// field, or the variables do not fit the field's arguments.
    pub fn new(table: &str, field: FieldKind, variables: Value) -> Result<Self, OperationError> {
        Self::template(table, field)?.with_variables(variables)
    }

    /// The `field` operation with no variables, for rendering its document.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or lacks the root field.
    pub fn template(table: &str, field: FieldKind) -> Result<Self, OperationError> {
        let table = tables::find(table).ok_or_else(|| OperationError::UnknownTable(table.to_string()))?;
        field.ensure_available(table)?;
        Ok(Self {
            table,
            field,
            variables: Map::new(),
            selection: Selection::default(),
            nodes: false,
            subscribe: false,
        })
    }

    /// Replace the variables, checking them against the field's arguments.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidVariables`] if `variables` is not an
    /// object or `null`, names an unknown argument or misses a required one.
    pub fn with_variables(mut self, variables: Value) -> Result<Self, OperationError> {
        let variables = match variables {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(OperationError::InvalidVariables(format!(
                    "expected an object, got {other}"
                )));
            }
        };

        let arguments = self.field.arguments(self.table);
        if let Some(unknown) = variables
            .keys()
            .find(|key| !arguments.iter().any(|a| &a.name == *key))
        {
            return Err(OperationError::InvalidVariables(format!(
                "`{}` has no argument `{unknown}`",
                self.field.field_name(self.table.name)
            )));
        }
        if let Some(missing) = arguments
            .iter()
            .find(|a| a.required() && variables.get(&a.name).is_none_or(Value::is_null))
        {
            return Err(OperationError::InvalidVariables(format!(
                "missing required argument `{}`",
                missing.name
            )));
        }

        self.variables = variables;
        Ok(self)
    }

    /// Embed a relationship (dotted path for nesting).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownRelationship`] for an unknown path
    /// segment.
    pub fn with(mut self, path: &str) -> Result<Self, OperationError> {
        self.selection.include(self.table, path)?;
        Ok(self)
    }

    /// Also return the rows of an aggregate.
    #[must_use]
    pub fn with_nodes(mut self) -> Self {
        self.nodes = true;
        self
    }

    /// Run a read field over `subscription_root`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unavailable`] for mutation fields.
    pub fn subscribe(mut self) -> Result<Self, OperationError> {
        if !self.field.subscribable() {
            return Err(OperationError::Unavailable {
                table: self.table.name,
                field: format!("subscription {}", self.field.field_name(self.table.name)),
            });
        }
        self.subscribe = true;
        Ok(self)
    }
}

impl Operation for DynamicOperation {
    type Variables = Map<String, Value>;
    type Output = Value;

    fn table(&self) -> &'static TableInfo {
        self.table
    }

    fn field(&self) -> FieldKind {
        self.field
    }

    fn variables(&self) -> &Self::Variables {
        &self.variables
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn kind(&self) -> OperationKind {
        if self.subscribe {
            OperationKind::Subscription
        } else {
            self.field.operation_kind()
        }
    }

    fn include_nodes(&self) -> bool {
        self.nodes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operation::Select;
    use crate::tables::checkout::Checkout;
    use serde_json::json;

    #[test]
    fn test_same_document_as_typed_builder() {
        let typed = Select::<Checkout>::new().with("contract").unwrap();
        let dynamic = DynamicOperation::new("checkout", FieldKind::Select, Value::Null)
            .unwrap()
            .with("contract")
            .unwrap();
        assert_eq!(typed.document(), dynamic.document());
    }

    #[test]
    fn test_unknown_table() {
        let err = DynamicOperation::new("orders", FieldKind::Select, Value::Null).unwrap_err();
        assert_eq!(err, OperationError::UnknownTable("orders".to_string()));
    }

    #[test]
    fn test_view_has_no_mutations() {
        let err = DynamicOperation::new(
            "analytics_wallet_signups",
            FieldKind::Delete,
            json!({"where": {}}),
        )
        .unwrap_err();
        assert!(matches!(err, OperationError::Unavailable { .. }));
    }

    #[test]
    fn test_variables_checked_against_arguments() {
        let err = DynamicOperation::new("checkout", FieldKind::Select, json!({"first": 10}))
            .unwrap_err();
        assert!(matches!(err, OperationError::InvalidVariables(_)));

        let err = DynamicOperation::new("checkout", FieldKind::SelectByPk, json!({})).unwrap_err();
        assert_eq!(
            err,
            OperationError::InvalidVariables("missing required argument `id`".to_string())
        );

        let err = DynamicOperation::new("checkout", FieldKind::Select, json!([1])).unwrap_err();
        assert!(matches!(err, OperationError::InvalidVariables(_)));
    }

    #[test]
    fn test_template_renders_without_variables() {
        let template = DynamicOperation::template("checkout", FieldKind::SelectByPk).unwrap();
        assert!(template.variables().is_empty());
        assert!(template.document().starts_with("query CheckoutByPk($id: uuid!) {"));
        assert!(template.with_variables(json!({})).is_err());
    }

    #[test]
    fn test_subscribe_only_reads() {
        let op = DynamicOperation::new("webhook", FieldKind::SelectAggregate, Value::Null)
            .unwrap()
            .subscribe()
            .unwrap();
        assert_eq!(op.kind(), OperationKind::Subscription);
        assert_eq!(op.operation_name(), "WebhookAggregateSubscription");

        let delete = DynamicOperation::new("webhook", FieldKind::Delete, json!({"where": {}}))
            .unwrap();
        assert!(delete.subscribe().is_err());
    }
}
