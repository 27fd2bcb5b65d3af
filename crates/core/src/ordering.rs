//! Schema-wide ordering enums.

use serde::{Deserialize, Serialize};

use crate::table::SchemaEnum;

/// Column ordering options (`order_by`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// in ascending order, nulls last
    #[default]
    Asc,
    /// in ascending order, nulls first
    AscNullsFirst,
    /// in ascending order, nulls last
    AscNullsLast,
    /// in descending order, nulls first
    Desc,
    /// in descending order, nulls first
    DescNullsFirst,
    /// in descending order, nulls last
    DescNullsLast,
}

impl SchemaEnum for OrderBy {
    const GRAPHQL_NAME: &'static str = "order_by";
    const ALL: &'static [Self] = &[
        Self::Asc,
        Self::AscNullsFirst,
        Self::AscNullsLast,
        Self::Desc,
        Self::DescNullsFirst,
        Self::DescNullsLast,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::AscNullsFirst => "asc_nulls_first",
            Self::AscNullsLast => "asc_nulls_last",
            Self::Desc => "desc",
            Self::DescNullsFirst => "desc_nulls_first",
            Self::DescNullsLast => "desc_nulls_last",
        }
    }
}

/// Ordering argument of a streaming cursor (`cursor_ordering`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CursorOrdering {
    /// ascending ordering of the cursor
    #[default]
    Asc,
    /// descending ordering of the cursor
    Desc,
}

impl SchemaEnum for CursorOrdering {
    const GRAPHQL_NAME: &'static str = "cursor_ordering";
    const ALL: &'static [Self] = &[Self::Asc, Self::Desc];

    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
