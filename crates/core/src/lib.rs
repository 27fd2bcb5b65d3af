//! Paygraph Core - typed mirror of the paygraph Hasura schema.
//!
//! Every tracked table and analytics view of the checkout/payments/wallet
//! schema is declared once in [`tables`]; the [`table!`] and [`view!`] macros
//! expand each declaration into the entity type and every companion shape
//! Hasura derives from it (filters, ordering, aggregates, mutation inputs,
//! stream cursors).
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O, no
//! HTTP client. Operation builders in [`operation`] render GraphQL documents
//! and variables; executing them is the job of `paygraph-client`.
//!
//! # Modules
//!
//! - [`scalars`] - Rust types backing the Postgres scalars
//! - [`comparison`] - `<scalar>_comparison_exp` filter leaves
//! - [`ordering`] - `order_by` and `cursor_ordering`
//! - [`table`] - traits and static metadata shared by every table
//! - [`envelope`] - generic shapes (aggregates, upserts, batched updates)
//! - [`tables`] - one module per table or view
//! - [`root`] - the query/mutation/subscription root catalog
//! - [`operation`] - typed operation builders
//! - [`introspection`] - drift check against a live schema

#![cfg_attr(not(test), forbid(unsafe_code))]

// serde attribute paths in macro output cannot use `$crate`
extern crate self as paygraph_core;

#[macro_use]
mod macros;

pub mod comparison;
pub mod envelope;
pub mod error;
pub mod introspection;
pub mod operation;
pub mod ordering;
pub mod root;
pub mod scalars;
pub mod table;
pub mod tables;

pub use comparison::{ComparisonExp, JsonbComparisonExp, StringComparisonExp};
pub use envelope::{
    Aggregate, AggregateCount, AggregateCountOrderBy, ArrRelInsertInput, MutationResponse,
    ObjRelInsertInput, OnConflict, StreamCursorInput, Updates,
};
pub use error::OperationError;
pub use operation::{
    Delete, DeleteByPk, DynamicOperation, Insert, InsertOne, Operation, OperationKind, Select,
    SelectAggregate, SelectByPk, SelectStream, Update, UpdateByPk, UpdateMany,
};
pub use ordering::{CursorOrdering, OrderBy};
pub use scalars::{Bigint, Date, Jsonb, Numeric, ScalarType, Timestamp, Timestamptz, Uuid};
pub use table::{
    BoolExpr, ColumnInfo, ConstraintInfo, KeyedTable, MutableTable, RelationshipInfo,
    RelationshipKind, SchemaEnum, Table, TableInfo, TableKind,
};
