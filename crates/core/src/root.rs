//! The root catalog: every query, mutation and subscription field, with its
//! arguments and return type.
//!
//! Hasura names root fields mechanically from the table name, so the catalog
//! is derived from [`TableInfo`] rather than declared.

use std::fmt;

use crate::error::OperationError;
use crate::table::TableInfo;
use crate::tables;

/// GraphQL operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Keyword opening the document (`query`, `mutation`, `subscription`).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Name of the root type in the schema.
    #[must_use]
    pub const fn root_type(self) -> &'static str {
        match self {
            Self::Query => "query_root",
            Self::Mutation => "mutation_root",
            Self::Subscription => "subscription_root",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The eleven root fields generated per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `<t>`
    Select,
    /// `<t>_by_pk`
    SelectByPk,
    /// `<t>_aggregate`
    SelectAggregate,
    /// `<t>_stream`
    SelectStream,
    /// `insert_<t>`
    Insert,
    /// `insert_<t>_one`
    InsertOne,
    /// `update_<t>`
    Update,
    /// `update_<t>_by_pk`
    UpdateByPk,
    /// `update_<t>_many`
    UpdateMany,
    /// `delete_<t>`
    Delete,
    /// `delete_<t>_by_pk`
    DeleteByPk,
}

impl FieldKind {
    pub const ALL: [Self; 11] = [
        Self::Select,
        Self::SelectByPk,
        Self::SelectAggregate,
        Self::SelectStream,
        Self::Insert,
        Self::InsertOne,
        Self::Update,
        Self::UpdateByPk,
        Self::UpdateMany,
        Self::Delete,
        Self::DeleteByPk,
    ];

    /// Short name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::SelectByPk => "by_pk",
            Self::SelectAggregate => "aggregate",
            Self::SelectStream => "stream",
            Self::Insert => "insert",
            Self::InsertOne => "insert_one",
            Self::Update => "update",
            Self::UpdateByPk => "update_by_pk",
            Self::UpdateMany => "update_many",
            Self::Delete => "delete",
            Self::DeleteByPk => "delete_by_pk",
        }
    }

    /// Parse a short name.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownOperation`] for anything else.
    pub fn parse(value: &str) -> Result<Self, OperationError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| OperationError::UnknownOperation(value.to_string()))
    }

    /// Root field name for `table`.
    #[must_use]
    pub fn field_name(self, table: &str) -> String {
        match self {
            Self::Select => table.to_string(),
            Self::SelectByPk => format!("{table}_by_pk"),
            Self::SelectAggregate => format!("{table}_aggregate"),
            Self::SelectStream => format!("{table}_stream"),
            Self::Insert => format!("insert_{table}"),
            Self::InsertOne => format!("insert_{table}_one"),
            Self::Update => format!("update_{table}"),
            Self::UpdateByPk => format!("update_{table}_by_pk"),
            Self::UpdateMany => format!("update_{table}_many"),
            Self::Delete => format!("delete_{table}"),
            Self::DeleteByPk => format!("delete_{table}_by_pk"),
        }
    }

    /// Root type that declares the field. Read fields are declared on both
    /// `query_root` and `subscription_root`; this is the primary one.
    #[must_use]
    pub const fn operation_kind(self) -> OperationKind {
        match self {
            Self::Select | Self::SelectByPk | Self::SelectAggregate => OperationKind::Query,
            Self::SelectStream => OperationKind::Subscription,
            _ => OperationKind::Mutation,
        }
    }

    /// Whether the field is also declared on `subscription_root`.
    #[must_use]
    pub const fn subscribable(self) -> bool {
        matches!(
            self,
            Self::Select | Self::SelectByPk | Self::SelectAggregate | Self::SelectStream
        )
    }

    /// Whether the field addresses a single row by primary key.
    #[must_use]
    pub const fn by_pk(self) -> bool {
        matches!(self, Self::SelectByPk | Self::UpdateByPk | Self::DeleteByPk)
    }

    /// Whether `table` exposes this field.
    #[must_use]
    pub fn available(self, table: &TableInfo) -> bool {
        if self.operation_kind() == OperationKind::Mutation && !table.is_mutable() {
            return false;
        }
        !self.by_pk() || table.has_primary_key()
    }

    /// Check availability, as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unavailable`] when `table` lacks the field.
    pub fn ensure_available(self, table: &'static TableInfo) -> Result<(), OperationError> {
        if self.available(table) {
            Ok(())
        } else {
            Err(OperationError::Unavailable {
                table: table.name,
                field: self.field_name(table.name),
            })
        }
    }

    /// What the field returns, which decides the selection set.
    #[must_use]
    pub const fn returns(self) -> ReturnShape {
        match self {
            Self::Select | Self::SelectStream => ReturnShape::Rows,
            Self::SelectByPk | Self::InsertOne | Self::UpdateByPk | Self::DeleteByPk => {
                ReturnShape::Row
            }
            Self::SelectAggregate => ReturnShape::Aggregate,
            Self::Insert | Self::Update | Self::Delete => ReturnShape::MutationResponse,
            Self::UpdateMany => ReturnShape::MutationResponses,
        }
    }

    /// Arguments of the field on `table`, in schema order.
    #[must_use]
    pub fn arguments(self, table: &TableInfo) -> Vec<Argument> {
        let t = table.name;
        let mut args = Vec::new();
        match self {
            Self::Select | Self::SelectAggregate => {
                args.push(Argument::new("distinct_on", format!("[{t}_select_column!]")));
                args.push(Argument::new("limit", "Int"));
                args.push(Argument::new("offset", "Int"));
                args.push(Argument::new("order_by", format!("[{t}_order_by!]")));
                args.push(Argument::new("where", format!("{t}_bool_exp")));
            }
            Self::SelectByPk | Self::DeleteByPk => {
                args.extend(
                    table
                        .primary_key_columns()
                        .into_iter()
                        .map(|c| Argument::new(c.name, format!("{}!", c.scalar))),
                );
            }
            Self::SelectStream => {
                args.push(Argument::new("batch_size", "Int!"));
                args.push(Argument::new("cursor", format!("[{t}_stream_cursor_input]!")));
                args.push(Argument::new("where", format!("{t}_bool_exp")));
            }
            Self::Insert => {
                args.push(Argument::new("objects", format!("[{t}_insert_input!]!")));
                args.push(Argument::new("on_conflict", format!("{t}_on_conflict")));
            }
            Self::InsertOne => {
                args.push(Argument::new("object", format!("{t}_insert_input!")));
                args.push(Argument::new("on_conflict", format!("{t}_on_conflict")));
            }
            Self::Update | Self::UpdateByPk => {
                args.extend(delta_arguments(table));
                if self == Self::Update {
                    args.push(Argument::new("where", format!("{t}_bool_exp!")));
                } else {
                    args.push(Argument::new("pk_columns", format!("{t}_pk_columns_input!")));
                }
            }
            Self::UpdateMany => {
                args.push(Argument::new("updates", format!("[{t}_updates!]!")));
            }
            Self::Delete => {
                args.push(Argument::new("where", format!("{t}_bool_exp!")));
            }
        }
        args
    }

    /// GraphQL return type of the field on `table`.
    #[must_use]
    pub fn return_type(self, table: &TableInfo) -> String {
        let t = table.name;
        match self.returns() {
            ReturnShape::Rows => format!("[{t}!]!"),
            ReturnShape::Row => t.to_string(),
            ReturnShape::Aggregate => format!("{t}_aggregate!"),
            ReturnShape::MutationResponse => format!("{t}_mutation_response"),
            ReturnShape::MutationResponses => format!("[{t}_mutation_response]"),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `_inc` exists only with numeric columns, the jsonb operators only with
/// jsonb columns.
fn delta_arguments(table: &TableInfo) -> Vec<Argument> {
    let t = table.name;
    let mut args = Vec::new();
    let jsonb = !table.jsonb_columns.is_empty();
    if jsonb {
        args.push(Argument::new("_append", format!("{t}_append_input")));
        args.push(Argument::new("_delete_at_path", format!("{t}_delete_at_path_input")));
        args.push(Argument::new("_delete_elem", format!("{t}_delete_elem_input")));
        args.push(Argument::new("_delete_key", format!("{t}_delete_key_input")));
    }
    if !table.numeric_columns.is_empty() {
        args.push(Argument::new("_inc", format!("{t}_inc_input")));
    }
    if jsonb {
        args.push(Argument::new("_prepend", format!("{t}_prepend_input")));
    }
    args.push(Argument::new("_set", format!("{t}_set_input")));
    args
}

/// Shape of a root field's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    /// `[t!]!`
    Rows,
    /// nullable `t`
    Row,
    /// `t_aggregate!`
    Aggregate,
    /// `t_mutation_response`
    MutationResponse,
    /// `[t_mutation_response]`
    MutationResponses,
}

/// One argument of a root field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// Type reference, e.g. `[checkout_order_by!]` or `uuid!`.
    pub type_ref: String,
}

impl Argument {
    fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
        }
    }

    /// Non-null arguments must always be supplied.
    #[must_use]
    pub fn required(&self) -> bool {
        self.type_ref.ends_with('!')
    }
}

/// A field of `query_root`, `mutation_root` or `subscription_root`.
#[derive(Debug, Clone)]
pub struct RootField {
    pub name: String,
    pub kind: FieldKind,
    pub table: &'static TableInfo,
    pub arguments: Vec<Argument>,
    pub return_type: String,
}

impl RootField {
    fn new(kind: FieldKind, table: &'static TableInfo) -> Self {
        Self {
            name: kind.field_name(table.name),
            kind,
            table,
            arguments: kind.arguments(table),
            return_type: kind.return_type(table),
        }
    }
}

/// Every root field declared on the `operation` root type, for every table.
#[must_use]
pub fn fields(operation: OperationKind) -> Vec<RootField> {
    tables::all()
        .flat_map(|table| fields_of(table, operation))
        .collect()
}

/// Root fields of one table on the `operation` root type.
#[must_use]
pub fn fields_of(table: &'static TableInfo, operation: OperationKind) -> Vec<RootField> {
    FieldKind::ALL
        .into_iter()
        .filter(|kind| kind.available(table))
        .filter(|kind| match operation {
            OperationKind::Subscription => kind.subscribable(),
            OperationKind::Query => kind.operation_kind() == OperationKind::Query,
            OperationKind::Mutation => kind.operation_kind() == OperationKind::Mutation,
        })
        .map(|kind| RootField::new(kind, table))
        .collect()
}

/// Look a root field up by name.
#[must_use]
pub fn find(operation: OperationKind, name: &str) -> Option<RootField> {
    fields(operation).into_iter().find(|f| f.name == name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::table::Table;
    use crate::tables::{analytics_seller_revenue::AnalyticsSellerRevenue, checkout::Checkout};

    fn names(table: &'static TableInfo, operation: OperationKind) -> Vec<String> {
        fields_of(table, operation).into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_table_root_fields() {
        let info = Checkout::info();
        assert_eq!(
            names(info, OperationKind::Query),
            ["checkout", "checkout_by_pk", "checkout_aggregate"]
        );
        assert_eq!(
            names(info, OperationKind::Subscription),
            [
                "checkout",
                "checkout_by_pk",
                "checkout_aggregate",
                "checkout_stream"
            ]
        );
        assert_eq!(
            names(info, OperationKind::Mutation),
            [
                "insert_checkout",
                "insert_checkout_one",
                "update_checkout",
                "update_checkout_by_pk",
                "update_checkout_many",
                "delete_checkout",
                "delete_checkout_by_pk"
            ]
        );
    }

    #[test]
    fn test_view_root_fields() {
        let info = AnalyticsSellerRevenue::info();
        assert_eq!(
            names(info, OperationKind::Query),
            ["analytics_seller_revenue", "analytics_seller_revenue_aggregate"]
        );
        assert!(names(info, OperationKind::Mutation).is_empty());
        assert!(FieldKind::SelectByPk.ensure_available(info).is_err());
    }

    #[test]
    fn test_by_pk_arguments() {
        let args = FieldKind::SelectByPk.arguments(Checkout::info());
        assert_eq!(args, [Argument::new("id", "uuid!")]);
        assert!(args[0].required());
    }

    #[test]
    fn test_update_arguments_follow_column_families() {
        let names = |table: &TableInfo| -> Vec<String> {
            FieldKind::Update
                .arguments(table)
                .into_iter()
                .map(|a| a.name)
                .collect()
        };
        assert_eq!(
            names(Checkout::info()),
            [
                "_append",
                "_delete_at_path",
                "_delete_elem",
                "_delete_key",
                "_inc",
                "_prepend",
                "_set",
                "where"
            ]
        );
        let account = crate::tables::find("account").unwrap();
        assert_eq!(names(account), ["_set", "where"]);
    }

    #[test]
    fn test_find_and_parse() {
        let field = find(OperationKind::Mutation, "update_webhook_many");
        assert_eq!(field.map(|f| f.return_type), Some("[webhook_mutation_response]".to_string()));
        assert_eq!(FieldKind::parse("insert_one"), Ok(FieldKind::InsertOne));
        assert!(FieldKind::parse("upsert").is_err());
    }
}
