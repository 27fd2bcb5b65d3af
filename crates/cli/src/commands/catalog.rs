//! Offline commands over the table catalog.

use paygraph_core::root::{self, FieldKind};
use paygraph_core::{
    DynamicOperation, Operation, OperationError, OperationKind, RelationshipKind, TableInfo,
    TableKind, tables,
};
use serde::Serialize;

use super::CommandError;
use crate::output::{Format, emit, print_text};

#[derive(Debug, Serialize)]
struct TableSummary {
    name: &'static str,
    kind: &'static str,
    columns: usize,
    primary_key: &'static [&'static str],
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct TableDescription {
    name: &'static str,
    kind: &'static str,
    description: &'static str,
    columns: Vec<ColumnDescription>,
    primary_key: &'static [&'static str],
    constraints: Vec<ConstraintDescription>,
    relationships: Vec<RelationshipDescription>,
    root_fields: Vec<RootFieldDescription>,
}

#[derive(Debug, Serialize)]
struct ColumnDescription {
    name: &'static str,
    #[serde(rename = "type")]
    type_ref: String,
}

#[derive(Debug, Serialize)]
struct ConstraintDescription {
    name: &'static str,
    columns: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct RelationshipDescription {
    name: &'static str,
    kind: &'static str,
    target: &'static str,
}

#[derive(Debug, Serialize)]
struct RootFieldDescription {
    root: &'static str,
    name: String,
    arguments: Vec<String>,
    returns: String,
}

const fn kind_name(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Table => "table",
        TableKind::View => "view",
    }
}

fn summary(info: &'static TableInfo) -> TableSummary {
    TableSummary {
        name: info.name,
        kind: kind_name(info.kind),
        columns: info.columns.len(),
        primary_key: info.primary_key,
        description: info.description(),
    }
}

fn description(info: &'static TableInfo) -> TableDescription {
    let columns = info
        .columns
        .iter()
        .map(|c| ColumnDescription {
            name: c.name,
            type_ref: if c.nullable {
                c.scalar.to_string()
            } else {
                format!("{}!", c.scalar)
            },
        })
        .collect();

    let constraints = info
        .constraints
        .iter()
        .map(|c| ConstraintDescription {
            name: c.name,
            columns: c.columns,
        })
        .collect();

    let relationships = info
        .relationships
        .iter()
        .map(|r| RelationshipDescription {
            name: r.name,
            kind: match r.kind {
                RelationshipKind::Object => "object",
                RelationshipKind::Array => "array",
            },
            target: (r.target)().name,
        })
        .collect();

    let root_fields = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ]
    .into_iter()
    .flat_map(|kind| {
        root::fields_of(info, kind)
            .into_iter()
            .map(move |field| RootFieldDescription {
                root: kind.root_type(),
                name: field.name,
                arguments: field
                    .arguments
                    .iter()
                    .map(|a| format!("{}: {}", a.name, a.type_ref))
                    .collect(),
                returns: field.return_type,
            })
    })
    .collect();

    TableDescription {
        name: info.name,
        kind: kind_name(info.kind),
        description: info.description(),
        columns,
        primary_key: info.primary_key,
        constraints,
        relationships,
        root_fields,
    }
}

fn find(table: &str) -> Result<&'static TableInfo, OperationError> {
    tables::find(table).ok_or_else(|| OperationError::UnknownTable(table.to_string()))
}

/// `paygraph tables`
pub fn tables(format: Format) -> Result<(), CommandError> {
    let rows: Vec<TableSummary> = tables::all().map(summary).collect();
    emit(&rows, format)
}

/// `paygraph describe <table>`
pub fn describe(table: &str, format: Format) -> Result<(), CommandError> {
    emit(&description(find(table)?), format)
}

/// Render the document for `operation` on `table`.
pub fn render_document(
    operation: &str,
    table: &str,
    with: &[String],
    subscribe: bool,
    nodes: bool,
) -> Result<String, CommandError> {
    let field = FieldKind::parse(operation)?;
    let mut op = DynamicOperation::template(table, field)?;
    for path in with {
        op = op.with(path)?;
    }
    if nodes {
        op = op.with_nodes();
    }
    if subscribe {
        op = op.subscribe()?;
    }
    Ok(op.document())
}

/// `paygraph document <operation> <table>`
pub fn document(
    operation: &str,
    table: &str,
    with: &[String],
    subscribe: bool,
    nodes: bool,
) -> Result<(), CommandError> {
    let document = render_document(operation, table, with, subscribe, nodes)?;
    print_text(document.trim_end());
    Ok(())
}
