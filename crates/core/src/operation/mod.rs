//! Typed operation builders.
//!
//! Each root field has a builder (`Select`, `InsertOne`, `DeleteByPk`, ...)
//! that knows three things: the GraphQL document to send, the variables to
//! send with it, and the Rust type the root field decodes into. The root
//! field is always aliased to [`RESULT_ALIAS`], so every response's `data`
//! decodes as [`RootData<Output>`].
//!
//! Documents declare every argument of the root field as a variable; unset
//! optional arguments are simply left out of the variables object.
//!
//! ```rust,ignore
//! use paygraph_core::{Operation, Select, StringComparisonExp};
//! use paygraph_core::tables::checkout::{self, Checkout};
//!
//! let op = Select::<Checkout>::new()
//!     .filter(checkout::BoolExp {
//!         title: Some(StringComparisonExp::ilike("%drop%")),
//!         ..Default::default()
//!     })
//!     .limit(10)
//!     .with("seller")?;
//! let document = op.document();
//! ```

mod dynamic;
mod mutation;
mod query;
mod selection;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use crate::root::{FieldKind, OperationKind};
pub use dynamic::DynamicOperation;
pub use mutation::{
    Delete, DeleteArgs, DeleteByPk, Insert, InsertArgs, InsertOne, InsertOneArgs, Update,
    UpdateByPk, UpdateByPkArgs, UpdateMany, UpdateManyArgs,
};
pub use query::{Select, SelectAggregate, SelectArgs, SelectByPk, SelectStream, StreamArgs};
pub use selection::Selection;

use crate::root::ReturnShape;
use crate::table::TableInfo;

/// Alias given to the root field of every rendered document.
pub const RESULT_ALIAS: &str = "result";

/// The `data` object of a response to a rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootData<T> {
    pub result: T,
}

/// A GraphQL operation against one root field.
pub trait Operation {
    /// Serialized as the `variables` object.
    type Variables: Serialize + Send + Sync;
    /// What the root field decodes into.
    type Output: DeserializeOwned;

    /// Table the root field belongs to.
    fn table(&self) -> &'static TableInfo;

    /// Root field kind.
    fn field(&self) -> FieldKind;

    fn variables(&self) -> &Self::Variables;

    /// Relationships embedded in the returned rows.
    fn selection(&self) -> &Selection;

    /// `query`, `mutation` or `subscription`.
    fn kind(&self) -> OperationKind {
        self.field().operation_kind()
    }

    /// Whether aggregate results also select `nodes`.
    fn include_nodes(&self) -> bool {
        false
    }

    /// Name of the root field in the schema.
    fn field_name(&self) -> String {
        self.field().field_name(self.table().name)
    }

    /// `operationName` sent with the request, e.g. `CheckoutByPk`.
    fn operation_name(&self) -> String {
        let mut name = pascal_case(&self.field_name());
        if self.kind() == OperationKind::Subscription
            && self.field().operation_kind() != OperationKind::Subscription
        {
            name.push_str("Subscription");
        }
        name
    }

    /// The full GraphQL document.
    fn document(&self) -> String {
        render(
            self.table(),
            self.field(),
            self.kind(),
            &self.operation_name(),
            self.selection(),
            self.include_nodes(),
        )
    }
}

/// `update_checkout_by_pk` becomes `UpdateCheckoutByPk`.
#[must_use]
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

const INDENT: &str = "  ";

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

const STAT_FIELDS: [&str; 8] = [
    "avg",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "sum",
    "var_pop",
    "var_samp",
    "variance",
];

/// Render the document of `field` on `table`.
#[must_use]
pub fn render(
    table: &'static TableInfo,
    field: FieldKind,
    kind: OperationKind,
    operation_name: &str,
    selection: &Selection,
    nodes: bool,
) -> String {
    let arguments = field.arguments(table);
    let mut out = String::new();

    if arguments.is_empty() {
        line(&mut out, 0, &format!("{kind} {operation_name} {{"));
    } else {
        let definitions = arguments
            .iter()
            .map(|a| format!("${}: {}", a.name, a.type_ref))
            .collect::<Vec<_>>()
            .join(", ");
        line(&mut out, 0, &format!("{kind} {operation_name}({definitions}) {{"));
    }

    let call = arguments
        .iter()
        .map(|a| format!("{}: ${}", a.name, a.name))
        .collect::<Vec<_>>()
        .join(", ");
    let field_name = field.field_name(table.name);
    if call.is_empty() {
        line(&mut out, 1, &format!("{RESULT_ALIAS}: {field_name} {{"));
    } else {
        line(&mut out, 1, &format!("{RESULT_ALIAS}: {field_name}({call}) {{"));
    }

    match field.returns() {
        ReturnShape::Rows | ReturnShape::Row => selection.write_rows(table, &mut out, 2),
        ReturnShape::Aggregate => {
            write_aggregate(table, &mut out, 2);
            if nodes {
                line(&mut out, 2, "nodes {");
                selection.write_rows(table, &mut out, 3);
                line(&mut out, 2, "}");
            }
        }
        ReturnShape::MutationResponse | ReturnShape::MutationResponses => {
            line(&mut out, 2, "affected_rows");
            line(&mut out, 2, "returning {");
            selection.write_rows(table, &mut out, 3);
            line(&mut out, 2, "}");
        }
    }

    line(&mut out, 1, "}");
    line(&mut out, 0, "}");
    out
}

fn write_aggregate(table: &TableInfo, out: &mut String, depth: usize) {
    line(out, depth, "aggregate {");
    line(out, depth + 1, "count");
    if !table.numeric_columns.is_empty() {
        let columns = table.numeric_columns.join(" ");
        for stat in STAT_FIELDS {
            line(out, depth + 1, &format!("{stat} {{ {columns} }}"));
        }
    }
    if !table.ordered_columns.is_empty() {
        let columns = table.ordered_columns.join(" ");
        line(out, depth + 1, &format!("max {{ {columns} }}"));
        line(out, depth + 1, &format!("min {{ {columns} }}"));
    }
    line(out, depth, "}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("update_checkout_by_pk"), "UpdateCheckoutByPk");
        assert_eq!(pascal_case("oauth"), "Oauth");
        assert_eq!(pascal_case("a__b"), "AB");
    }

    #[test]
    fn test_aggregate_selection_of_table_without_numeric_columns() {
        let info = crate::tables::find("buyer").unwrap();
        let mut out = String::new();
        write_aggregate(info, &mut out, 0);
        assert!(!out.contains("avg"));
        assert!(out.contains("max { created_at email id wallet_address }"));
    }
}
