//! Write operations: `insert_<t>`, `update_<t>`, `delete_<t>` and their
//! `_one`, `_by_pk` and `_many` variants.

use std::fmt;

use serde::Serialize;

use super::{FieldKind, Operation, Selection};
use crate::envelope::{MutationResponse, OnConflict, Updates};
use crate::error::OperationError;
use crate::table::{KeyedTable, MutableTable, TableInfo};

/// Implements `Clone` and `Debug` for argument structs whose fields are
/// associated types, without requiring them of the table type itself.
macro_rules! args_impls {
    ($args:ident<$t:ident: $($bound:path),+> { $($field:ident => $label:literal),+ $(,)? }) => {
        impl<$t> Clone for $args<$t>
        where
            $($t: $bound,)+
        {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)+
                }
            }
        }

        impl<$t> fmt::Debug for $args<$t>
        where
            $($t: $bound,)+
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($args))
                    $(.field($label, &self.$field))+
                    .finish()
            }
        }
    };
}

/// Builder methods shared by every mutation builder.
macro_rules! returning_with {
    ($builder:ident<$t:ident: $($bound:path),+>) => {
        impl<$t> $builder<$t>
        where
            $($t: $bound,)+
        {
            /// Embed a relationship in the returned rows (dotted path for
            /// nesting).
            ///
            /// # Errors
            ///
            /// Returns [`OperationError::UnknownRelationship`] for an unknown
            /// path segment.
            pub fn with(mut self, path: &str) -> Result<Self, OperationError> {
                self.selection.include($t::info(), path)?;
                Ok(self)
            }
        }
    };
}

/// Setters for the update operators, on builders whose `args` carry them.
///
/// An operator input with no column set is left out of the variables, so
/// `_inc` on a table without numeric columns is a no-op rather than an
/// undeclared variable.
macro_rules! delta_setters {
    ($builder:ident<$t:ident: $($bound:path),+>) => {
        impl<$t> $builder<$t>
        where
            $($t: $bound,)+
        {
            /// `_set`: overwrite columns.
            #[must_use]
            pub fn set(mut self, set: $t::SetInput) -> Self {
                self.args.set = Some(set);
                self
            }

            /// `_inc`: add to numeric columns.
            #[must_use]
            pub fn inc(mut self, inc: $t::IncInput) -> Self {
                self.args.inc = Some(inc);
                self
            }

            /// `_append`: append to jsonb columns.
            #[must_use]
            pub fn append(mut self, append: $t::AppendInput) -> Self {
                self.args.append = Some(append);
                self
            }

            /// `_prepend`: prepend to jsonb columns.
            #[must_use]
            pub fn prepend(mut self, prepend: $t::AppendInput) -> Self {
                self.args.prepend = Some(prepend);
                self
            }

            /// `_delete_key`: remove a key from jsonb columns.
            #[must_use]
            pub fn delete_key(mut self, delete_key: $t::DeleteKeyInput) -> Self {
                self.args.delete_key = Some(delete_key);
                self
            }

            /// `_delete_elem`: remove an array element from jsonb columns.
            #[must_use]
            pub fn delete_elem(mut self, delete_elem: $t::DeleteElemInput) -> Self {
                self.args.delete_elem = Some(delete_elem);
                self
            }

            /// `_delete_at_path`: remove a nested path from jsonb columns.
            #[must_use]
            pub fn delete_at_path(mut self, delete_at_path: $t::DeleteAtPathInput) -> Self {
                self.args.delete_at_path = Some(delete_at_path);
                self
            }
        }
    };
}

/// Implements [`Operation`] for a builder with `args` and `selection` fields.
macro_rules! mutation_operation {
    ($builder:ident<$t:ident: $($bound:path),+> => $field:ident, $args:ty, $output:ty) => {
        impl<$t> Operation for $builder<$t>
        where
            $($t: $bound,)+
        {
            type Variables = $args;
            type Output = $output;

            fn table(&self) -> &'static TableInfo {
                $t::info()
            }

            fn field(&self) -> FieldKind {
                FieldKind::$field
            }

            fn variables(&self) -> &Self::Variables {
                &self.args
            }

            fn selection(&self) -> &Selection {
                &self.selection
            }
        }
    };
}

/// Arguments of `insert_<t>`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct InsertArgs<T: MutableTable> {
    pub objects: Vec<T::InsertInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<OnConflict<T>>,
}

args_impls!(InsertArgs<T: MutableTable> { objects => "objects", on_conflict => "on_conflict" });

/// `insert_<t>`: insert rows, optionally upserting.
#[derive(Debug, Clone)]
pub struct Insert<T: MutableTable> {
    args: InsertArgs<T>,
    selection: Selection,
}

impl<T: MutableTable> Insert<T> {
    #[must_use]
    pub fn new(objects: impl IntoIterator<Item = T::InsertInput>) -> Self {
        Self {
            args: InsertArgs {
                objects: objects.into_iter().collect(),
                on_conflict: None,
            },
            selection: Selection::default(),
        }
    }

    /// Upsert behaviour on constraint violations.
    #[must_use]
    pub fn on_conflict(mut self, on_conflict: OnConflict<T>) -> Self {
        self.args.on_conflict = Some(on_conflict);
        self
    }
}

returning_with!(Insert<T: MutableTable>);
mutation_operation!(Insert<T: MutableTable> => Insert, InsertArgs<T>, MutationResponse<T>);

/// Arguments of `insert_<t>_one`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct InsertOneArgs<T: MutableTable> {
    pub object: T::InsertInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<OnConflict<T>>,
}

args_impls!(InsertOneArgs<T: MutableTable> { object => "object", on_conflict => "on_conflict" });

/// `insert_<t>_one`: insert one row. `None` when an `on_conflict` with no
/// update columns skipped it.
#[derive(Debug, Clone)]
pub struct InsertOne<T: MutableTable> {
    args: InsertOneArgs<T>,
    selection: Selection,
}

impl<T: MutableTable> InsertOne<T> {
    #[must_use]
    pub fn new(object: T::InsertInput) -> Self {
        Self {
            args: InsertOneArgs {
                object,
                on_conflict: None,
            },
            selection: Selection::default(),
        }
    }

    /// Upsert behaviour on constraint violations.
    #[must_use]
    pub fn on_conflict(mut self, on_conflict: OnConflict<T>) -> Self {
        self.args.on_conflict = Some(on_conflict);
        self
    }
}

returning_with!(InsertOne<T: MutableTable>);
mutation_operation!(InsertOne<T: MutableTable> => InsertOne, InsertOneArgs<T>, Option<T>);

/// `update_<t>`: update every row matching a filter.
///
/// The arguments have exactly the shape of one `<t>_updates` entry.
#[derive(Debug, Clone)]
pub struct Update<T: MutableTable> {
    args: Updates<T>,
    selection: Selection,
}

impl<T: MutableTable> Update<T> {
    /// Update rows matching `filter`. An empty filter matches every row.
    #[must_use]
    pub fn new(filter: T::BoolExp) -> Self {
        Self {
            args: Updates {
                append: None,
                delete_at_path: None,
                delete_elem: None,
                delete_key: None,
                inc: None,
                prepend: None,
                set: None,
                r#where: filter,
            },
            selection: Selection::default(),
        }
    }
}

delta_setters!(Update<T: MutableTable>);
returning_with!(Update<T: MutableTable>);
mutation_operation!(Update<T: MutableTable> => Update, Updates<T>, MutationResponse<T>);

/// Arguments of `update_<t>_by_pk`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct UpdateByPkArgs<T: MutableTable + KeyedTable> {
    #[serde(rename = "_append", skip_serializing_if = "crate::envelope::is_unset")]
    pub append: Option<T::AppendInput>,
    #[serde(rename = "_delete_at_path", skip_serializing_if = "crate::envelope::is_unset")]
    pub delete_at_path: Option<T::DeleteAtPathInput>,
    #[serde(rename = "_delete_elem", skip_serializing_if = "crate::envelope::is_unset")]
    pub delete_elem: Option<T::DeleteElemInput>,
    #[serde(rename = "_delete_key", skip_serializing_if = "crate::envelope::is_unset")]
    pub delete_key: Option<T::DeleteKeyInput>,
    #[serde(rename = "_inc", skip_serializing_if = "crate::envelope::is_unset")]
    pub inc: Option<T::IncInput>,
    #[serde(rename = "_prepend", skip_serializing_if = "crate::envelope::is_unset")]
    pub prepend: Option<T::AppendInput>,
    #[serde(rename = "_set", skip_serializing_if = "crate::envelope::is_unset")]
    pub set: Option<T::SetInput>,
    pub pk_columns: T::PkColumns,
}

args_impls!(UpdateByPkArgs<T: MutableTable, KeyedTable> {
    append => "_append",
    delete_at_path => "_delete_at_path",
    delete_elem => "_delete_elem",
    delete_key => "_delete_key",
    inc => "_inc",
    prepend => "_prepend",
    set => "_set",
    pk_columns => "pk_columns",
});

/// `update_<t>_by_pk`: update one row. `None` when no row has that key.
#[derive(Debug, Clone)]
pub struct UpdateByPk<T: MutableTable + KeyedTable> {
    args: UpdateByPkArgs<T>,
    selection: Selection,
}

impl<T: MutableTable + KeyedTable> UpdateByPk<T> {
    #[must_use]
    pub fn new(pk: T::PkColumns) -> Self {
        Self {
            args: UpdateByPkArgs {
                append: None,
                delete_at_path: None,
                delete_elem: None,
                delete_key: None,
                inc: None,
                prepend: None,
                set: None,
                pk_columns: pk,
            },
            selection: Selection::default(),
        }
    }
}

delta_setters!(UpdateByPk<T: MutableTable, KeyedTable>);
returning_with!(UpdateByPk<T: MutableTable, KeyedTable>);
mutation_operation!(UpdateByPk<T: MutableTable, KeyedTable> => UpdateByPk, UpdateByPkArgs<T>, Option<T>);

/// Arguments of `update_<t>_many`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct UpdateManyArgs<T: MutableTable> {
    pub updates: Vec<Updates<T>>,
}

args_impls!(UpdateManyArgs<T: MutableTable> { updates => "updates" });

/// `update_<t>_many`: several updates in one transaction, one response each.
#[derive(Debug, Clone)]
pub struct UpdateMany<T: MutableTable> {
    args: UpdateManyArgs<T>,
    selection: Selection,
}

impl<T: MutableTable> UpdateMany<T> {
    #[must_use]
    pub fn new(updates: impl IntoIterator<Item = Updates<T>>) -> Self {
        Self {
            args: UpdateManyArgs {
                updates: updates.into_iter().collect(),
            },
            selection: Selection::default(),
        }
    }
}

returning_with!(UpdateMany<T: MutableTable>);
mutation_operation!(
    UpdateMany<T: MutableTable> => UpdateMany,
    UpdateManyArgs<T>,
    Vec<Option<MutationResponse<T>>>
);

/// Arguments of `delete_<t>`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct DeleteArgs<T: MutableTable> {
    #[serde(rename = "where")]
    pub r#where: T::BoolExp,
}

args_impls!(DeleteArgs<T: MutableTable> { r#where => "where" });

/// `delete_<t>`: delete every row matching a filter.
#[derive(Debug, Clone)]
pub struct Delete<T: MutableTable> {
    args: DeleteArgs<T>,
    selection: Selection,
}

impl<T: MutableTable> Delete<T> {
    /// Delete rows matching `filter`. An empty filter matches every row.
    #[must_use]
    pub fn new(filter: T::BoolExp) -> Self {
        Self {
            args: DeleteArgs { r#where: filter },
            selection: Selection::default(),
        }
    }
}

returning_with!(Delete<T: MutableTable>);
mutation_operation!(Delete<T: MutableTable> => Delete, DeleteArgs<T>, MutationResponse<T>);

/// `delete_<t>_by_pk`: delete one row. `None` when no row has that key.
#[derive(Debug, Clone)]
pub struct DeleteByPk<T: MutableTable + KeyedTable> {
    args: T::PkColumns,
    selection: Selection,
}

impl<T: MutableTable + KeyedTable> DeleteByPk<T> {
    #[must_use]
    pub fn new(pk: T::PkColumns) -> Self {
        Self {
            args: pk,
            selection: Selection::default(),
        }
    }
}

returning_with!(DeleteByPk<T: MutableTable, KeyedTable>);
mutation_operation!(DeleteByPk<T: MutableTable, KeyedTable> => DeleteByPk, T::PkColumns, Option<T>);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::comparison::{ComparisonExp, StringComparisonExp};
    use crate::root::OperationKind;
    use crate::table::BoolExpr;
    use crate::tables::account::{self, Account};
    use crate::tables::checkout::{self, Checkout};
    use serde_json::json;

    #[test]
    fn test_insert_one_upsert() {
        let op = InsertOne::<Account>::new(account::InsertInput {
            email: Some("ops@example.com".to_string()),
            role: Some("owner".to_string()),
            ..Default::default()
        })
        .on_conflict(OnConflict::update(
            account::Constraint::AccountEmailKey,
            [account::UpdateColumn::Role],
        ));
        assert_eq!(op.kind(), OperationKind::Mutation);
        assert!(op.document().starts_with(
            "mutation InsertAccountOne($object: account_insert_input!, \
             $on_conflict: account_on_conflict) {\n"
        ));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({
                "object": {"email": "ops@example.com", "role": "owner"},
                "on_conflict": {"constraint": "account_email_key", "update_columns": ["role"]}
            })
        );
    }

    #[test]
    fn test_insert_returning_document() {
        let op = Insert::<Account>::new([account::InsertInput::default()])
            .with("seller")
            .unwrap();
        let document = op.document();
        assert!(document.contains("    affected_rows\n    returning {\n      convertkit_subscriber_id\n"));
        assert!(document.contains("      seller {\n"));
    }

    #[test]
    fn test_update_declares_only_existing_operators() {
        let op = Update::<Account>::new(account::BoolExp {
            email: Some(StringComparisonExp::eq("ops@example.com")),
            ..Default::default()
        })
        .set(account::SetInput {
            full_name: Some(Some("Ops Team".to_string())),
            ..Default::default()
        });
        assert!(op.document().starts_with(
            "mutation UpdateAccount($_set: account_set_input, $where: account_bool_exp!) {\n"
        ));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({
                "_set": {"full_name": "Ops Team"},
                "where": {"email": {"_eq": "ops@example.com"}}
            })
        );
    }

    #[test]
    fn test_update_by_pk_with_inc_and_append() {
        let op = UpdateByPk::<Checkout>::new(checkout::PkColumnsInput {
            id: uuid::Uuid::nil(),
        })
        .inc(checkout::IncInput {
            limit_per_wallet: Some(1),
            ..Default::default()
        })
        .append(checkout::AppendInput {
            price: Some(json!({"discount": "5%"})),
            ..Default::default()
        });
        assert!(op.document().contains("$pk_columns: checkout_pk_columns_input!"));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({
                "_append": {"price": {"discount": "5%"}},
                "_inc": {"limit_per_wallet": 1},
                "pk_columns": {"id": "00000000-0000-0000-0000-000000000000"}
            })
        );
    }

    #[test]
    fn test_empty_operators_are_not_sent() {
        // account has no numeric or jsonb columns
        let op = Update::<Account>::new(account::BoolExp::default())
            .set(account::SetInput {
                source: Some(None),
                ..Default::default()
            })
            .inc(account::IncInput::default())
            .append(account::AppendInput::default())
            .delete_key(account::DeleteKeyInput::default());
        assert!(!op.document().contains("$_inc"));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({"_set": {"source": null}, "where": {}})
        );

        let op = UpdateByPk::<Checkout>::new(checkout::PkColumnsInput {
            id: uuid::Uuid::nil(),
        })
        .set(checkout::SetInput::default())
        .inc(checkout::IncInput {
            total_supply: Some(1),
            ..Default::default()
        });
        let variables = serde_json::to_value(op.variables()).unwrap();
        assert!(variables.get("_set").is_none());
        assert_eq!(variables["_inc"], json!({"total_supply": 1}));

        let batch = Updates::<Account>::inc(account::BoolExp::default(), account::IncInput::default());
        assert_eq!(serde_json::to_value(&batch).unwrap(), json!({"where": {}}));
    }

    #[test]
    fn test_update_many() {
        let archive = Updates::<Checkout>::set(
            checkout::BoolExp {
                title: Some(StringComparisonExp::like("test%")),
                ..Default::default()
            },
            checkout::SetInput {
                is_archived: Some(true),
                ..Default::default()
            },
        );
        let bump = Updates::<Checkout>::inc(
            checkout::BoolExp {
                is_archived: Some(ComparisonExp::eq(false)),
                ..Default::default()
            },
            checkout::IncInput {
                total_supply: Some(10),
                ..Default::default()
            },
        );
        let op = UpdateMany::new([archive, bump]);
        assert!(op.document().starts_with(
            "mutation UpdateCheckoutMany($updates: [checkout_updates!]!) {\n"
        ));
        let variables = serde_json::to_value(op.variables()).unwrap();
        assert_eq!(variables["updates"].as_array().map(Vec::len), Some(2));
        assert_eq!(variables["updates"][1]["_inc"], json!({"total_supply": 10}));
    }

    #[test]
    fn test_delete_variables() {
        let filter = account::BoolExp {
            role: Some(StringComparisonExp::eq("invited")),
            ..Default::default()
        }
        .negate();
        let op = Delete::<Account>::new(filter);
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({"where": {"_not": {"role": {"_eq": "invited"}}}})
        );
        let op = DeleteByPk::<Account>::new(account::PkColumnsInput {
            id: uuid::Uuid::nil(),
        });
        assert!(op.document().starts_with("mutation DeleteAccountByPk($id: uuid!) {\n"));
    }
}
