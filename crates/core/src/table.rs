//! Traits tying every table module to its companion shapes, plus the static
//! metadata each table publishes about itself.
//!
//! A table module (see [`crate::tables`]) declares an entity struct and a set
//! of companion types (`BoolExp`, `OrderByInput`, `InsertInput`, ...). The
//! traits here name those companions as associated types so generic code can
//! go from `Checkout` to `<Checkout as Table>::BoolExp` without knowing the
//! module it lives in.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A GraphQL enum whose values are wire literals (column names, constraint
/// names, ordering keywords).
pub trait SchemaEnum:
    Copy + Debug + Eq + Hash + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Enum type name in the schema, e.g. `checkout_select_column`.
    const GRAPHQL_NAME: &'static str;

    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// The wire literal of this value.
    fn as_str(self) -> &'static str;

    /// Look a value up by its wire literal.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

/// Shape requirements shared by every input object.
pub trait InputObject:
    Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> InputObject for T where
    T: Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Shape requirements shared by every output object.
pub trait OutputObject:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> OutputObject for T where
    T: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// A `<table>_bool_exp` filter.
///
/// Composition is closed: the result of [`all`](Self::all),
/// [`any`](Self::any) and [`negate`](Self::negate) is again a filter of the
/// same table.
pub trait BoolExpr: InputObject {
    /// `{ _and: exps }`
    fn all(exps: Vec<Self>) -> Self;

    /// `{ _or: exps }`
    fn any(exps: Vec<Self>) -> Self;

    /// `{ _not: self }`
    #[must_use]
    fn negate(self) -> Self;

    /// An empty filter matches every row.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Both filters must hold.
    #[must_use]
    fn and(self, other: Self) -> Self {
        Self::all(vec![self, other])
    }

    /// Either filter may hold.
    #[must_use]
    fn or(self, other: Self) -> Self {
        Self::any(vec![self, other])
    }
}

/// A tracked table or view: everything needed to read it.
pub trait Table: OutputObject {
    /// `<table>_select_column`
    type SelectColumn: SchemaEnum;
    /// `<table>_bool_exp`
    type BoolExp: BoolExpr;
    /// `<table>_order_by`
    type OrderBy: InputObject;
    /// `<table>_aggregate_fields`
    type AggregateFields: OutputObject + Default;
    /// `<table>_stream_cursor_value_input`
    type StreamCursorValue: InputObject;

    /// Static metadata describing the table.
    fn info() -> &'static TableInfo;
}

/// A table that accepts inserts, updates and deletes.
pub trait MutableTable: Table {
    /// `<table>_update_column`
    type UpdateColumn: SchemaEnum;
    /// `<table>_constraint`
    type Constraint: SchemaEnum;
    /// `<table>_insert_input`
    type InsertInput: InputObject;
    /// `<table>_set_input`
    type SetInput: InputObject;
    /// `<table>_inc_input`
    type IncInput: InputObject;
    /// `<table>_append_input` (same shape as `<table>_prepend_input`)
    type AppendInput: InputObject;
    /// `<table>_delete_key_input`
    type DeleteKeyInput: InputObject;
    /// `<table>_delete_elem_input`
    type DeleteElemInput: InputObject;
    /// `<table>_delete_at_path_input`
    type DeleteAtPathInput: InputObject;
}

/// A table with a primary key, addressable through `*_by_pk` fields.
pub trait KeyedTable: Table {
    /// `<table>_pk_columns_input`
    type PkColumns: InputObject;
}

/// Whether a relation is a tracked table or a read-only view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Table,
    View,
}

/// One column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    /// GraphQL scalar name (`uuid`, `String`, `Int`, ...).
    pub scalar: &'static str,
    pub nullable: bool,
}

/// A unique or primary key constraint usable in `on_conflict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintInfo {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Object (many-to-one) or array (one-to-many) relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Object,
    Array,
}

/// A relationship field and the table it points at.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipInfo {
    pub name: &'static str,
    pub kind: RelationshipKind,
    /// `<name>_aggregate` field, present on array relationships.
    pub aggregate_field: Option<&'static str>,
    pub target: fn() -> &'static TableInfo,
}

/// Static description of a table, published by every table module.
#[derive(Debug)]
pub struct TableInfo {
    pub name: &'static str,
    pub kind: TableKind,
    /// Doc comment lines of the entity type.
    pub doc: &'static [&'static str],
    pub columns: &'static [ColumnInfo],
    pub primary_key: &'static [&'static str],
    /// Columns covered by `sum`, `avg`, `stddev*`, `var*` and `_inc`.
    pub numeric_columns: &'static [&'static str],
    /// Columns covered by `min` and `max`.
    pub ordered_columns: &'static [&'static str],
    /// Columns accepting `_append`, `_prepend` and `_delete_*`.
    pub jsonb_columns: &'static [&'static str],
    pub constraints: &'static [ConstraintInfo],
    pub relationships: &'static [RelationshipInfo],
}

impl TableInfo {
    /// First line of the table's documentation.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.doc
            .iter()
            .copied()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
    }

    /// Name of a companion type: `type_name("bool_exp")` is `checkout_bool_exp`.
    #[must_use]
    pub fn type_name(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.name.to_string()
        } else {
            format!("{}_{suffix}", self.name)
        }
    }

    /// Look a column up by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Look a relationship up by field name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&RelationshipInfo> {
        self.relationships.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.kind == TableKind::Table
    }

    #[must_use]
    pub const fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Primary key columns with their scalar types.
    #[must_use]
    pub fn primary_key_columns(&self) -> Vec<&ColumnInfo> {
        self.primary_key
            .iter()
            .filter_map(|name| self.column(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::checkout::Checkout;

    #[test]
    fn test_type_name() {
        let info = Checkout::info();
        assert_eq!(info.type_name(""), "checkout");
        assert_eq!(info.type_name("bool_exp"), "checkout_bool_exp");
    }

    #[test]
    fn test_relationship_lookup() {
        let info = Checkout::info();
        let seller = info.relationship("seller");
        assert!(seller.is_some_and(|r| r.kind == RelationshipKind::Object));
        assert_eq!(seller.map(|r| (r.target)().name), Some("seller"));
        assert!(info.relationship("nope").is_none());
    }

    #[test]
    fn test_primary_key_columns() {
        let info = Checkout::info();
        let pk = info.primary_key_columns();
        assert_eq!(pk.len(), 1);
        assert_eq!(pk[0].scalar, "uuid");
    }
}
