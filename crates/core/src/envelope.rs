//! Shapes that are identical for every table, expressed once as generics.

use serde::{Deserialize, Serialize};

use crate::ordering::{CursorOrdering, OrderBy};
use crate::table::{MutableTable, Table};

/// `<table>_aggregate`: aggregate values plus the matching rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Aggregate<T: Table> {
    #[serde(default)]
    pub aggregate: Option<T::AggregateFields>,
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T: Table> Aggregate<T> {
    /// Row count, when `count` was selected.
    #[must_use]
    pub fn count(&self) -> Option<i32>
    where
        T::AggregateFields: AggregateCount,
    {
        self.aggregate.as_ref().and_then(AggregateCount::count)
    }
}

/// Read access to the `count` of an aggregate.
pub trait AggregateCount {
    fn count(&self) -> Option<i32>;
}

/// `<table>_mutation_response`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MutationResponse<T: Table> {
    /// number of rows affected by the mutation
    pub affected_rows: i32,
    /// data from the rows affected by the mutation
    #[serde(default)]
    pub returning: Vec<T>,
}

/// `<table>_on_conflict`: upsert behaviour of an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct OnConflict<T: MutableTable> {
    pub constraint: T::Constraint,
    /// Columns overwritten on conflict; empty means do nothing.
    #[serde(default)]
    pub update_columns: Vec<T::UpdateColumn>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub r#where: Option<T::BoolExp>,
}

impl<T: MutableTable> OnConflict<T> {
    /// Ignore rows that collide on `constraint`.
    #[must_use]
    pub fn do_nothing(constraint: T::Constraint) -> Self {
        Self {
            constraint,
            update_columns: Vec::new(),
            r#where: None,
        }
    }

    /// Overwrite `columns` of rows that collide on `constraint`.
    #[must_use]
    pub fn update(constraint: T::Constraint, columns: impl IntoIterator<Item = T::UpdateColumn>) -> Self {
        Self {
            constraint,
            update_columns: columns.into_iter().collect(),
            r#where: None,
        }
    }

    /// Only overwrite colliding rows matching `filter`.
    #[must_use]
    pub fn when(mut self, filter: T::BoolExp) -> Self {
        self.r#where = Some(filter);
        self
    }
}

/// `<table>_obj_rel_insert_input`: nested insert of a single related row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct ObjRelInsertInput<T: MutableTable> {
    pub data: T::InsertInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<OnConflict<T>>,
}

/// `<table>_arr_rel_insert_input`: nested insert of related rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct ArrRelInsertInput<T: MutableTable> {
    pub data: Vec<T::InsertInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<OnConflict<T>>,
}

/// `<table>_stream_cursor_input`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct StreamCursorInput<T: Table> {
    /// Stream column value to start from.
    pub initial_value: T::StreamCursorValue,
    pub ordering: CursorOrdering,
}

impl<T: Table> StreamCursorInput<T> {
    #[must_use]
    pub fn new(initial_value: T::StreamCursorValue, ordering: CursorOrdering) -> Self {
        Self {
            initial_value,
            ordering,
        }
    }
}

/// `None`, or an update operator input with no column set.
///
/// Empty operator objects are never sent: a table without numeric or jsonb
/// columns has no `_inc` or jsonb operator arguments at all.
#[allow(clippy::ref_option)]
pub(crate) fn is_unset<I: Default + PartialEq>(input: &Option<I>) -> bool {
    input.as_ref().is_none_or(|input| *input == I::default())
}

/// `<table>_updates`: one entry of an `update_<table>_many` batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct Updates<T: MutableTable> {
    #[serde(rename = "_append", default, skip_serializing_if = "is_unset")]
    pub append: Option<T::AppendInput>,
    #[serde(rename = "_delete_at_path", default, skip_serializing_if = "is_unset")]
    pub delete_at_path: Option<T::DeleteAtPathInput>,
    #[serde(rename = "_delete_elem", default, skip_serializing_if = "is_unset")]
    pub delete_elem: Option<T::DeleteElemInput>,
    #[serde(rename = "_delete_key", default, skip_serializing_if = "is_unset")]
    pub delete_key: Option<T::DeleteKeyInput>,
    #[serde(rename = "_inc", default, skip_serializing_if = "is_unset")]
    pub inc: Option<T::IncInput>,
    #[serde(rename = "_prepend", default, skip_serializing_if = "is_unset")]
    pub prepend: Option<T::AppendInput>,
    #[serde(rename = "_set", default, skip_serializing_if = "is_unset")]
    pub set: Option<T::SetInput>,
    /// filter the rows which have to be updated
    #[serde(rename = "where")]
    pub r#where: T::BoolExp,
}

impl<T: MutableTable> Updates<T> {
    /// Apply `set` to every row matching `filter`.
    #[must_use]
    pub fn set(filter: T::BoolExp, set: T::SetInput) -> Self {
        Self {
            append: None,
            delete_at_path: None,
            delete_elem: None,
            delete_key: None,
            inc: None,
            prepend: None,
            set: Some(set),
            r#where: filter,
        }
    }

    /// Increment numeric columns of every row matching `filter`.
    #[must_use]
    pub fn inc(filter: T::BoolExp, inc: T::IncInput) -> Self {
        Self {
            append: None,
            delete_at_path: None,
            delete_elem: None,
            delete_key: None,
            inc: Some(inc),
            prepend: None,
            set: None,
            r#where: filter,
        }
    }
}

/// Ordering of an array relationship by its row count
/// (`<table>_aggregate_order_by` restricted to `count`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateCountOrderBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<OrderBy>,
}
