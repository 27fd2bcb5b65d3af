//! Scalar types of the Hasura schema.
//!
//! Hasura exposes Postgres column types as GraphQL scalars (`uuid`,
//! `timestamptz`, `numeric`, `jsonb`, ...). Each scalar maps to one Rust type
//! here, and the [`ScalarType`] trait ties that type to its comparison
//! expression and wire name so table declarations only ever spell the Rust
//! type once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::comparison::{ComparisonExp, JsonbComparisonExp, StringComparisonExp};

/// Postgres `uuid`.
pub type Uuid = uuid::Uuid;

/// Postgres `timestamptz` (ISO 8601 with offset).
pub type Timestamptz = chrono::DateTime<chrono::Utc>;

/// Postgres `timestamp` (no time zone).
pub type Timestamp = chrono::NaiveDateTime;

/// Postgres `date`.
pub type Date = chrono::NaiveDate;

/// Postgres `numeric`.
pub type Numeric = rust_decimal::Decimal;

/// Postgres `bigint`.
pub type Bigint = i64;

/// Postgres `jsonb`, passed through untouched.
pub type Jsonb = serde_json::Value;

/// A Rust type that can back a table column.
///
/// Implemented for every scalar and for `Option<T>` (nullable columns), which
/// shares the comparison expression and wire name of `T`.
pub trait ScalarType {
    /// The non-null value type, used by inputs where every field is optional.
    type Base: Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync;

    /// Filter leaf used for this column in `<table>_bool_exp`.
    type Comparison: Clone
        + std::fmt::Debug
        + Default
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync;

    /// GraphQL scalar name as it appears in the schema.
    const GRAPHQL_NAME: &'static str;

    /// Whether the column accepts `null`.
    const NULLABLE: bool = false;
}

macro_rules! scalar {
    ($ty:ty, $name:literal) => {
        scalar!($ty, $name, ComparisonExp<$ty>);
    };
    ($ty:ty, $name:literal, $cmp:ty) => {
        impl ScalarType for $ty {
            type Base = $ty;
            type Comparison = $cmp;
            const GRAPHQL_NAME: &'static str = $name;
        }
    };
}

scalar!(String, "String", StringComparisonExp);
scalar!(i32, "Int");
scalar!(bool, "Boolean");
scalar!(f64, "float8");
scalar!(Bigint, "bigint");
scalar!(Numeric, "numeric");
scalar!(Uuid, "uuid");
scalar!(Timestamptz, "timestamptz");
scalar!(Timestamp, "timestamp");
scalar!(Date, "date");
scalar!(Jsonb, "jsonb", JsonbComparisonExp);

impl<T: ScalarType> ScalarType for Option<T> {
    type Base = T::Base;
    type Comparison = T::Comparison;
    const GRAPHQL_NAME: &'static str = T::GRAPHQL_NAME;
    const NULLABLE: bool = true;
}

/// Deserializes a field that is present in the input, `null` included, as
/// `Some`.
///
/// Used on `Option<C>` input fields where `C` is the column type, so a
/// nullable column reads `{"col": null}` as `Some(None)` and an absent key as
/// `None`.
///
/// # Errors
///
/// Fails when the value does not deserialize as `T`.
#[doc(hidden)]
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Scalars that support `sum`/`avg`/`stddev`/`variance` aggregates and `_inc`.
#[must_use]
pub fn is_numeric_scalar(graphql_name: &str) -> bool {
    matches!(graphql_name, "Int" | "bigint" | "numeric" | "float8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_names() {
        assert_eq!(<String as ScalarType>::GRAPHQL_NAME, "String");
        assert_eq!(<Uuid as ScalarType>::GRAPHQL_NAME, "uuid");
        assert_eq!(<Timestamptz as ScalarType>::GRAPHQL_NAME, "timestamptz");
        assert_eq!(<Jsonb as ScalarType>::GRAPHQL_NAME, "jsonb");
        assert_eq!(<Bigint as ScalarType>::GRAPHQL_NAME, "bigint");
    }

    #[test]
    fn test_option_is_nullable() {
        assert!(!<i32 as ScalarType>::NULLABLE);
        assert!(<Option<i32> as ScalarType>::NULLABLE);
        assert_eq!(<Option<Numeric> as ScalarType>::GRAPHQL_NAME, "numeric");
    }

    #[test]
    fn test_numeric_scalars() {
        assert!(is_numeric_scalar("Int"));
        assert!(is_numeric_scalar("numeric"));
        assert!(!is_numeric_scalar("String"));
        assert!(!is_numeric_scalar("timestamptz"));
    }
}
