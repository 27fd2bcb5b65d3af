//! Read operations: `<t>`, `<t>_by_pk`, `<t>_aggregate`, `<t>_stream`.

use std::fmt;

use serde::Serialize;

use super::{FieldKind, Operation, OperationKind, Selection};
use crate::envelope::{Aggregate, StreamCursorInput};
use crate::error::OperationError;
use crate::table::{KeyedTable, Table, TableInfo};

/// Arguments shared by `<t>` and `<t>_aggregate`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct SelectArgs<T: Table> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_on: Option<Vec<T::SelectColumn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<T::OrderBy>>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub r#where: Option<T::BoolExp>,
}

impl<T: Table> Default for SelectArgs<T> {
    fn default() -> Self {
        Self {
            distinct_on: None,
            limit: None,
            offset: None,
            order_by: None,
            r#where: None,
        }
    }
}

impl<T: Table> Clone for SelectArgs<T> {
    fn clone(&self) -> Self {
        Self {
            distinct_on: self.distinct_on.clone(),
            limit: self.limit,
            offset: self.offset,
            order_by: self.order_by.clone(),
            r#where: self.r#where.clone(),
        }
    }
}

impl<T: Table> fmt::Debug for SelectArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectArgs")
            .field("distinct_on", &self.distinct_on)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("order_by", &self.order_by)
            .field("where", &self.r#where)
            .finish()
    }
}

/// Setters shared by the builders that carry [`SelectArgs`].
macro_rules! select_args_setters {
    ($builder:ident) => {
        impl<T: Table> $builder<T> {
            /// Only rows matching `filter`.
            #[must_use]
            pub fn filter(mut self, filter: T::BoolExp) -> Self {
                self.args.r#where = Some(filter);
                self
            }

            /// Sort by each entry in turn.
            #[must_use]
            pub fn order_by(mut self, order_by: impl IntoIterator<Item = T::OrderBy>) -> Self {
                self.args.order_by = Some(order_by.into_iter().collect());
                self
            }

            /// Keep the first row of each distinct combination of `columns`.
            #[must_use]
            pub fn distinct_on(
                mut self,
                columns: impl IntoIterator<Item = T::SelectColumn>,
            ) -> Self {
                self.args.distinct_on = Some(columns.into_iter().collect());
                self
            }

            #[must_use]
            pub fn limit(mut self, limit: i32) -> Self {
                self.args.limit = Some(limit);
                self
            }

            #[must_use]
            pub fn offset(mut self, offset: i32) -> Self {
                self.args.offset = Some(offset);
                self
            }

            /// Embed a relationship (dotted path for nesting).
            ///
            /// # Errors
            ///
            /// Returns [`OperationError::UnknownRelationship`] for an unknown
            /// path segment.
            pub fn with(mut self, path: &str) -> Result<Self, OperationError> {
                self.selection.include(T::info(), path)?;
                Ok(self)
            }

            /// Run as a live query over `subscription_root`.
            #[must_use]
            pub fn subscribe(mut self) -> Self {
                self.subscribe = true;
                self
            }
        }

        impl<T: Table> Default for $builder<T> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// `<t>`: list rows.
#[derive(Debug, Clone)]
pub struct Select<T: Table> {
    args: SelectArgs<T>,
    selection: Selection,
    subscribe: bool,
}

impl<T: Table> Select<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: SelectArgs::default(),
            selection: Selection::default(),
            subscribe: false,
        }
    }
}

select_args_setters!(Select);

impl<T: Table> Operation for Select<T> {
    type Variables = SelectArgs<T>;
    type Output = Vec<T>;

    fn table(&self) -> &'static TableInfo {
        T::info()
    }

    fn field(&self) -> FieldKind {
        FieldKind::Select
    }

    fn variables(&self) -> &Self::Variables {
        &self.args
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn kind(&self) -> OperationKind {
        if self.subscribe {
            OperationKind::Subscription
        } else {
            OperationKind::Query
        }
    }
}

/// `<t>_aggregate`: aggregate values, optionally with the matching rows.
#[derive(Debug, Clone)]
pub struct SelectAggregate<T: Table> {
    args: SelectArgs<T>,
    selection: Selection,
    nodes: bool,
    subscribe: bool,
}

impl<T: Table> SelectAggregate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: SelectArgs::default(),
            selection: Selection::default(),
            nodes: false,
            subscribe: false,
        }
    }

    /// Also return the aggregated rows.
    #[must_use]
    pub fn with_nodes(mut self) -> Self {
        self.nodes = true;
        self
    }
}

select_args_setters!(SelectAggregate);

impl<T: Table> Operation for SelectAggregate<T> {
    type Variables = SelectArgs<T>;
    type Output = Aggregate<T>;

    fn table(&self) -> &'static TableInfo {
        T::info()
    }

    fn field(&self) -> FieldKind {
        FieldKind::SelectAggregate
    }

    fn variables(&self) -> &Self::Variables {
        &self.args
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn kind(&self) -> OperationKind {
        if self.subscribe {
            OperationKind::Subscription
        } else {
            OperationKind::Query
        }
    }

    fn include_nodes(&self) -> bool {
        self.nodes
    }
}

/// `<t>_by_pk`: one row, or `None`.
#[derive(Debug, Clone)]
pub struct SelectByPk<T: KeyedTable> {
    pk: T::PkColumns,
    selection: Selection,
    subscribe: bool,
}

impl<T: KeyedTable> SelectByPk<T> {
    #[must_use]
    pub fn new(pk: T::PkColumns) -> Self {
        Self {
            pk,
            selection: Selection::default(),
            subscribe: false,
        }
    }

    /// Embed a relationship (dotted path for nesting).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownRelationship`] for an unknown path
    /// segment.
    pub fn with(mut self, path: &str) -> Result<Self, OperationError> {
        self.selection.include(T::info(), path)?;
        Ok(self)
    }

    /// Watch the row over `subscription_root`.
    #[must_use]
    pub fn subscribe(mut self) -> Self {
        self.subscribe = true;
        self
    }
}

impl<T: KeyedTable> Operation for SelectByPk<T> {
    type Variables = T::PkColumns;
    type Output = Option<T>;

    fn table(&self) -> &'static TableInfo {
        T::info()
    }

    fn field(&self) -> FieldKind {
        FieldKind::SelectByPk
    }

    fn variables(&self) -> &Self::Variables {
        &self.pk
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn kind(&self) -> OperationKind {
        if self.subscribe {
            OperationKind::Subscription
        } else {
            OperationKind::Query
        }
    }
}

/// Arguments of `<t>_stream`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct StreamArgs<T: Table> {
    pub batch_size: i32,
    pub cursor: Vec<StreamCursorInput<T>>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub r#where: Option<T::BoolExp>,
}

impl<T: Table> Clone for StreamArgs<T> {
    fn clone(&self) -> Self {
        Self {
            batch_size: self.batch_size,
            cursor: self.cursor.clone(),
            r#where: self.r#where.clone(),
        }
    }
}

impl<T: Table> fmt::Debug for StreamArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamArgs")
            .field("batch_size", &self.batch_size)
            .field("cursor", &self.cursor)
            .field("where", &self.r#where)
            .finish()
    }
}

/// `<t>_stream`: rows delivered in batches from a cursor onwards.
#[derive(Debug, Clone)]
pub struct SelectStream<T: Table> {
    args: StreamArgs<T>,
    selection: Selection,
}

impl<T: Table> SelectStream<T> {
    #[must_use]
    pub fn new(batch_size: i32, cursor: StreamCursorInput<T>) -> Self {
        Self {
            args: StreamArgs {
                batch_size,
                cursor: vec![cursor],
                r#where: None,
            },
            selection: Selection::default(),
        }
    }

    /// Only stream rows matching `filter`.
    #[must_use]
    pub fn filter(mut self, filter: T::BoolExp) -> Self {
        self.args.r#where = Some(filter);
        self
    }

    /// Embed a relationship (dotted path for nesting).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownRelationship`] for an unknown path
    /// segment.
    pub fn with(mut self, path: &str) -> Result<Self, OperationError> {
        self.selection.include(T::info(), path)?;
        Ok(self)
    }
}

impl<T: Table> Operation for SelectStream<T> {
    type Variables = StreamArgs<T>;
    type Output = Vec<T>;

    fn table(&self) -> &'static TableInfo {
        T::info()
    }

    fn field(&self) -> FieldKind {
        FieldKind::SelectStream
    }

    fn variables(&self) -> &Self::Variables {
        &self.args
    }

    fn selection(&self) -> &Selection {
        &self.selection
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::comparison::{ComparisonExp, StringComparisonExp};
    use crate::ordering::{CursorOrdering, OrderBy};
    use crate::tables::analytics_seller_revenue::AnalyticsSellerRevenue;
    use crate::tables::checkout::{self, Checkout};
    use crate::tables::webhook_event::{self, WebhookEvent};
    use serde_json::json;

    #[test]
    fn test_select_document() {
        let op = Select::<Checkout>::new().with("seller").unwrap();
        let document = op.document();
        assert!(document.starts_with(
            "query Checkout($distinct_on: [checkout_select_column!], $limit: Int, $offset: Int, \
             $order_by: [checkout_order_by!], $where: checkout_bool_exp) {\n"
        ));
        assert!(document.contains(
            "  result: checkout(distinct_on: $distinct_on, limit: $limit, offset: $offset, \
             order_by: $order_by, where: $where) {\n"
        ));
        assert!(document.contains("    limit_per_transaction\n"));
        assert!(document.contains("    seller {\n      company_name\n"));
        assert_eq!(op.operation_name(), "Checkout");
    }

    #[test]
    fn test_select_variables_omit_unset() {
        let op = Select::<Checkout>::new()
            .filter(checkout::BoolExp {
                title: Some(StringComparisonExp::ilike("%drop%")),
                ..Default::default()
            })
            .order_by([checkout::OrderByInput {
                created_at: Some(OrderBy::Desc),
                ..Default::default()
            }])
            .limit(20);
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({
                "limit": 20,
                "order_by": [{"created_at": "desc"}],
                "where": {"title": {"_ilike": "%drop%"}}
            })
        );
    }

    #[test]
    fn test_select_subscription() {
        let op = Select::<Checkout>::new().subscribe();
        assert_eq!(op.kind(), OperationKind::Subscription);
        assert_eq!(op.operation_name(), "CheckoutSubscription");
        assert!(op.document().starts_with("subscription CheckoutSubscription("));
    }

    #[test]
    fn test_by_pk() {
        let id = uuid::Uuid::nil();
        let op = SelectByPk::<Checkout>::new(checkout::PkColumnsInput { id });
        assert!(op.document().starts_with("query CheckoutByPk($id: uuid!) {\n"));
        assert!(op.document().contains("result: checkout_by_pk(id: $id) {"));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({"id": "00000000-0000-0000-0000-000000000000"})
        );
    }

    #[test]
    fn test_aggregate_of_view() {
        let op = SelectAggregate::<AnalyticsSellerRevenue>::new().with_nodes();
        let document = op.document();
        assert!(document.contains(
            "      sum { gross_revenue net_revenue refunded transaction_count }\n"
        ));
        assert!(document.contains("    nodes {\n      currency\n"));
    }

    #[test]
    fn test_stream() {
        let cursor = StreamCursorInput::<WebhookEvent>::new(
            webhook_event::StreamCursorValueInput {
                attempt_count: Some(0),
                ..Default::default()
            },
            CursorOrdering::Asc,
        );
        let op = SelectStream::new(50, cursor).filter(webhook_event::BoolExp {
            attempt_count: Some(ComparisonExp::gt(0)),
            ..Default::default()
        });
        assert_eq!(op.kind(), OperationKind::Subscription);
        assert!(op.document().starts_with(
            "subscription WebhookEventStream($batch_size: Int!, \
             $cursor: [webhook_event_stream_cursor_input]!, $where: webhook_event_bool_exp) {\n"
        ));
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({
                "batch_size": 50,
                "cursor": [{"initial_value": {"attempt_count": 0}, "ordering": "ASC"}],
                "where": {"attempt_count": {"_gt": 0}}
            })
        );
    }
}
