//! Commands that talk to the endpoint.

use clap::Args;
use futures_util::StreamExt;
use paygraph_client::{GraphClient, GraphError};
use paygraph_core::root::FieldKind;
use paygraph_core::{DynamicOperation, Operation};
use serde_json::{Map, Value};

use super::{CommandError, parse_json};
use crate::output::{Format, emit};

/// Table and filter shared by reading commands.
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Table or view name
    pub table: String,
    /// `<table>_bool_exp` as JSON
    #[arg(long = "where")]
    pub filter: Option<String>,
    /// Relationship to embed (dotted for nesting); repeatable
    #[arg(long = "with")]
    pub with: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub read: ReadArgs,
    /// `[<table>_order_by!]` as JSON (an object or an array of objects)
    #[arg(long)]
    pub order_by: Option<String>,
    /// Column to deduplicate on; repeatable
    #[arg(long)]
    pub distinct_on: Vec<String>,
    #[arg(long)]
    pub limit: Option<i32>,
    #[arg(long)]
    pub offset: Option<i32>,
}

impl ReadArgs {
    fn filter_variables(&self) -> Result<Map<String, Value>, CommandError> {
        let mut variables = Map::new();
        if let Some(filter) = &self.filter {
            variables.insert("where".to_string(), parse_json("where", filter)?);
        }
        Ok(variables)
    }
}

impl SelectArgs {
    fn variables(&self) -> Result<Value, CommandError> {
        let mut variables = self.read.filter_variables()?;
        if let Some(order_by) = &self.order_by {
            variables.insert("order_by".to_string(), parse_json("order-by", order_by)?);
        }
        if !self.distinct_on.is_empty() {
            variables.insert("distinct_on".to_string(), self.distinct_on.clone().into());
        }
        if let Some(limit) = self.limit {
            variables.insert("limit".to_string(), limit.into());
        }
        if let Some(offset) = self.offset {
            variables.insert("offset".to_string(), offset.into());
        }
        Ok(Value::Object(variables))
    }

    fn operation(&self) -> Result<DynamicOperation, CommandError> {
        build(
            &self.read.table,
            FieldKind::Select,
            self.variables()?,
            &self.read.with,
        )
    }
}

fn build(
    table: &str,
    field: FieldKind,
    variables: Value,
    with: &[String],
) -> Result<DynamicOperation, CommandError> {
    let mut op = DynamicOperation::new(table, field, variables)?;
    for path in with {
        op = op.with(path)?;
    }
    Ok(op)
}

/// `paygraph select <table>`
pub async fn select(args: &SelectArgs, format: Format) -> Result<(), CommandError> {
    let client = GraphClient::from_env()?;
    let rows = client.execute(&args.operation()?).await?;
    emit(&rows, format)
}

/// `paygraph get <table> --pk JSON`
pub async fn get(table: &str, pk: &str, with: &[String], format: Format) -> Result<(), CommandError> {
    let op = build(table, FieldKind::SelectByPk, parse_json("pk", pk)?, with)?;

    let client = GraphClient::from_env()?;
    let row = client.execute(&op).await?;
    if row.is_null() {
        return Err(GraphError::NotFound(format!("{} {pk}", op.field_name())).into());
    }
    emit(&row, format)
}

/// `paygraph aggregate <table>`
pub async fn aggregate(args: &ReadArgs, nodes: bool, format: Format) -> Result<(), CommandError> {
    let mut op = build(
        &args.table,
        FieldKind::SelectAggregate,
        Value::Object(args.filter_variables()?),
        &args.with,
    )?;
    if nodes {
        op = op.with_nodes();
    }

    let client = GraphClient::from_env()?;
    let aggregate = client.execute(&op).await?;
    emit(&aggregate, format)
}

/// `paygraph watch <table>`
pub async fn watch(args: &SelectArgs, format: Format) -> Result<(), CommandError> {
    let op = args.operation()?.subscribe()?;

    let client = GraphClient::from_env()?;
    let mut events = client.subscribe(&op).await?;
    tracing::info!(operation = %op.operation_name(), "Watching for changes");
    while let Some(rows) = events.next().await {
        emit(&rows?, format)?;
    }
    tracing::info!("Subscription closed by the server");
    Ok(())
}

/// `paygraph verify`
pub async fn verify(format: Format) -> Result<(), CommandError> {
    let client = GraphClient::from_env()?;
    let drift = client.verify().await?;
    if drift.is_empty() {
        tracing::info!("Live schema matches the catalog");
        return Ok(());
    }
    let lines: Vec<String> = drift.iter().map(ToString::to_string).collect();
    emit(&lines, format)?;
    Err(CommandError::Drift(drift.len()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use paygraph_core::OperationError;
    use serde_json::json;

    fn select_args(table: &str) -> SelectArgs {
        SelectArgs {
            read: ReadArgs {
                table: table.to_string(),
                filter: None,
                with: Vec::new(),
            },
            order_by: None,
            distinct_on: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    #[test]
    fn test_select_variables() {
        let mut args = select_args("checkout");
        args.read.filter = Some(r#"{"is_archived": {"_eq": false}}"#.to_string());
        args.order_by = Some(r#"{"created_at": "desc"}"#.to_string());
        args.distinct_on = vec!["seller_id".to_string()];
        args.limit = Some(10);

        assert_eq!(
            args.variables().unwrap(),
            json!({
                "where": {"is_archived": {"_eq": false}},
                "order_by": {"created_at": "desc"},
                "distinct_on": ["seller_id"],
                "limit": 10
            })
        );
        assert_eq!(args.operation().unwrap().operation_name(), "Checkout");
    }

    #[test]
    fn test_unset_options_are_omitted() {
        assert_eq!(select_args("webhook").variables().unwrap(), json!({}));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut args = select_args("checkout");
        args.order_by = Some("created_at desc".to_string());
        assert!(matches!(
            args.variables().unwrap_err(),
            CommandError::InvalidJson { arg: "order-by", .. }
        ));

        let args = select_args("orders");
        assert!(matches!(
            args.operation().unwrap_err(),
            CommandError::Operation(OperationError::UnknownTable(_))
        ));

        let err = build("checkout", FieldKind::SelectByPk, json!("abc"), &[]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Operation(OperationError::InvalidVariables(_))
        ));
    }

    #[test]
    fn test_watch_operation_is_a_subscription() {
        let op = select_args("webhook_event").operation().unwrap().subscribe().unwrap();
        assert_eq!(op.operation_name(), "WebhookEventSubscription");
        assert!(op.document().starts_with("subscription WebhookEventSubscription("));
    }
}
