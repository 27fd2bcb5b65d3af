//! Drift check between the local catalog and a live schema.
//!
//! The client runs [`INTROSPECTION_QUERY`] against the endpoint and hands the
//! `data` object to [`verify`], which lists every way the live schema differs
//! from what the table modules declare.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::root::{self, OperationKind};
use crate::table::TableInfo;
use crate::tables;

/// Introspection query selecting just what [`verify`] compares.
pub const INTROSPECTION_QUERY: &str = "query Introspection {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      kind
      name
      fields(includeDeprecated: true) { name }
      inputFields { name }
      enumValues(includeDeprecated: true) { name }
    }
  }
}
";

/// `data` of an introspection response.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: Schema,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub query_type: Option<Named>,
    pub mutation_type: Option<Named>,
    pub subscription_type: Option<Named>,
    #[serde(default)]
    pub types: Vec<FullType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullType {
    pub kind: String,
    pub name: Option<String>,
    pub fields: Option<Vec<Named>>,
    pub input_fields: Option<Vec<Named>>,
    pub enum_values: Option<Vec<Named>>,
}

impl FullType {
    fn names(list: Option<&Vec<Named>>) -> BTreeSet<&str> {
        list.map(|l| l.iter().map(|n| n.name.as_str()).collect())
            .unwrap_or_default()
    }

    fn field_names(&self) -> BTreeSet<&str> {
        Self::names(self.fields.as_ref())
    }

    fn input_field_names(&self) -> BTreeSet<&str> {
        Self::names(self.input_fields.as_ref())
    }

    fn enum_value_names(&self) -> BTreeSet<&str> {
        Self::names(self.enum_values.as_ref())
    }
}

impl Schema {
    fn find(&self, name: &str) -> Option<&FullType> {
        self.types.iter().find(|t| t.name.as_deref() == Some(name))
    }

    fn root_name(&self, kind: OperationKind) -> String {
        let named = match kind {
            OperationKind::Query => self.query_type.as_ref(),
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        };
        named.map_or_else(|| kind.root_type().to_string(), |n| n.name.clone())
    }
}

/// One divergence between the live schema and the local catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// A type the catalog declares is absent.
    MissingType { name: String },
    /// A field (column, relationship or input field) is absent.
    MissingField { type_name: String, field: String },
    /// An enum's values differ.
    EnumMismatch {
        name: String,
        /// Declared locally, absent live.
        missing: Vec<String>,
        /// Present live, not declared locally.
        unexpected: Vec<String>,
    },
    /// A root field the catalog expects is absent.
    MissingRootField { root: String, field: String },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType { name } => write!(f, "type `{name}` is missing"),
            Self::MissingField { type_name, field } => {
                write!(f, "`{type_name}.{field}` is missing")
            }
            Self::EnumMismatch {
                name,
                missing,
                unexpected,
            } => write!(
                f,
                "enum `{name}` differs: missing [{}], unexpected [{}]",
                missing.join(", "),
                unexpected.join(", ")
            ),
            Self::MissingRootField { root, field } => write!(f, "`{root}.{field}` is missing"),
        }
    }
}

/// Compare every table, enum and root field against `schema`.
#[must_use]
pub fn verify(schema: &Schema) -> Vec<Drift> {
    let mut drift = Vec::new();
    for table in tables::all() {
        verify_table(schema, table, &mut drift);
    }
    for kind in [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ] {
        let root_name = schema.root_name(kind);
        let live = schema.find(&root_name).map(FullType::field_names).unwrap_or_default();
        for field in root::fields(kind) {
            if !live.contains(field.name.as_str()) {
                drift.push(Drift::MissingRootField {
                    root: root_name.clone(),
                    field: field.name,
                });
            }
        }
    }
    drift
}

fn verify_table(schema: &Schema, table: &TableInfo, drift: &mut Vec<Drift>) {
    let Some(object) = schema.find(table.name) else {
        drift.push(Drift::MissingType {
            name: table.name.to_string(),
        });
        return;
    };

    let fields = object.field_names();
    let expected = table.columns.iter().map(|c| c.name).chain(
        table
            .relationships
            .iter()
            .flat_map(|r| std::iter::once(r.name).chain(r.aggregate_field)),
    );
    for field in expected {
        if !fields.contains(field) {
            drift.push(Drift::MissingField {
                type_name: table.name.to_string(),
                field: field.to_string(),
            });
        }
    }

    let bool_exp = table.type_name("bool_exp");
    match schema.find(&bool_exp) {
        Some(input) => {
            let fields = input.input_field_names();
            for column in table.column_names() {
                if !fields.contains(column) {
                    drift.push(Drift::MissingField {
                        type_name: bool_exp.clone(),
                        field: column.to_string(),
                    });
                }
            }
        }
        None => drift.push(Drift::MissingType { name: bool_exp }),
    }

    let columns: Vec<&str> = table.column_names().collect();
    verify_enum(schema, &table.type_name("select_column"), &columns, drift);
    if table.is_mutable() {
        verify_enum(schema, &table.type_name("update_column"), &columns, drift);
        let constraints: Vec<&str> = table.constraints.iter().map(|c| c.name).collect();
        verify_enum(schema, &table.type_name("constraint"), &constraints, drift);
    }
}

fn verify_enum(schema: &Schema, name: &str, expected: &[&str], drift: &mut Vec<Drift>) {
    let Some(live) = schema.find(name) else {
        drift.push(Drift::MissingType {
            name: name.to_string(),
        });
        return;
    };
    let live = live.enum_value_names();
    let expected: BTreeSet<&str> = expected.iter().copied().collect();
    let missing: Vec<String> = expected.difference(&live).map(ToString::to_string).collect();
    let unexpected: Vec<String> = live.difference(&expected).map(ToString::to_string).collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        drift.push(Drift::EnumMismatch {
            name: name.to_string(),
            missing,
            unexpected,
        });
    }
}

fn named(names: impl IntoIterator<Item = impl Into<String>>) -> Value {
    Value::Array(
        names
            .into_iter()
            .map(|n| {
                let name: String = n.into();
                json!({ "name": name })
            })
            .collect(),
    )
}

/// Introspection `data` describing exactly the local catalog, for tests of
/// [`verify`] and of clients that run it.
#[doc(hidden)]
#[must_use]
pub fn catalog_introspection() -> Value {
    let mut types = Vec::new();
    for table in tables::all() {
        let mut fields: Vec<String> = table.column_names().map(String::from).collect();
        for rel in table.relationships {
            fields.push(rel.name.to_string());
            fields.extend(rel.aggregate_field.map(String::from));
        }
        types.push(json!({"kind": "OBJECT", "name": table.name, "fields": named(fields)}));
        types.push(json!({
            "kind": "INPUT_OBJECT",
            "name": table.type_name("bool_exp"),
            "inputFields": named(table.column_names())
        }));
        let mut enums = vec![("select_column", named(table.column_names()))];
        if table.is_mutable() {
            enums.push(("update_column", named(table.column_names())));
            enums.push(("constraint", named(table.constraints.iter().map(|c| c.name))));
        }
        for (suffix, values) in enums {
            types.push(json!({"kind": "ENUM", "name": table.type_name(suffix), "enumValues": values}));
        }
    }
    for kind in [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ] {
        let fields: Vec<String> = root::fields(kind).into_iter().map(|f| f.name).collect();
        types.push(json!({"kind": "OBJECT", "name": kind.root_type(), "fields": named(fields)}));
    }
    json!({"__schema": {
        "queryType": {"name": "query_root"},
        "mutationType": {"name": "mutation_root"},
        "subscriptionType": {"name": "subscription_root"},
        "types": types
    }})
}
