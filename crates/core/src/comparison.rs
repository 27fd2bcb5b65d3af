//! Column-level comparison operators, the leaves of every `_bool_exp`.
//!
//! Hasura generates one `<scalar>_comparison_exp` input per scalar. They all
//! share the same core operators, so a single generic [`ComparisonExp`] covers
//! most of them; `String` and `jsonb` add their own operators on top.

use serde::{Deserialize, Serialize};

/// Boolean expression to compare columns of a scalar type.
///
/// All operators are optional; those left unset are not serialized. Several
/// operators in one expression are combined with AND by the server. Unknown
/// operators are rejected: an empty leaf matches every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonExp<T> {
    #[serde(rename = "_eq", default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<T>,
    #[serde(rename = "_gt", default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,
    #[serde(rename = "_gte", default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,
    #[serde(rename = "_in", default, skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<T>>,
    #[serde(rename = "_is_null", default, skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
    #[serde(rename = "_lt", default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    #[serde(rename = "_lte", default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,
    #[serde(rename = "_neq", default, skip_serializing_if = "Option::is_none")]
    pub neq: Option<T>,
    #[serde(rename = "_nin", default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<Vec<T>>,
}

impl<T> Default for ComparisonExp<T> {
    fn default() -> Self {
        Self {
            eq: None,
            gt: None,
            gte: None,
            in_: None,
            is_null: None,
            lt: None,
            lte: None,
            neq: None,
            nin: None,
        }
    }
}

impl<T> ComparisonExp<T> {
    /// `_eq: value`
    #[must_use]
    pub fn eq(value: T) -> Self {
        Self {
            eq: Some(value),
            ..Self::default()
        }
    }

    /// `_neq: value`
    #[must_use]
    pub fn neq(value: T) -> Self {
        Self {
            neq: Some(value),
            ..Self::default()
        }
    }

    /// `_gt: value`
    #[must_use]
    pub fn gt(value: T) -> Self {
        Self {
            gt: Some(value),
            ..Self::default()
        }
    }

    /// `_gte: value`
    #[must_use]
    pub fn gte(value: T) -> Self {
        Self {
            gte: Some(value),
            ..Self::default()
        }
    }

    /// `_lt: value`
    #[must_use]
    pub fn lt(value: T) -> Self {
        Self {
            lt: Some(value),
            ..Self::default()
        }
    }

    /// `_lte: value`
    #[must_use]
    pub fn lte(value: T) -> Self {
        Self {
            lte: Some(value),
            ..Self::default()
        }
    }

    /// `_in: values`
    #[must_use]
    pub fn is_in(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            in_: Some(values.into_iter().collect()),
            ..Self::default()
        }
    }

    /// `_nin: values`
    #[must_use]
    pub fn not_in(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            nin: Some(values.into_iter().collect()),
            ..Self::default()
        }
    }

    /// `_is_null: null`
    #[must_use]
    pub fn null(null: bool) -> Self {
        Self {
            is_null: Some(null),
            ..Self::default()
        }
    }

    /// Range helper: `_gte: lower, _lt: upper`.
    #[must_use]
    pub fn between(lower: T, upper: T) -> Self {
        Self {
            gte: Some(lower),
            lt: Some(upper),
            ..Self::default()
        }
    }
}

/// Flat deserialization shape for a comparison type that extends the base
/// operators. `flatten` cannot be combined with `deny_unknown_fields`.
macro_rules! flat_comparison {
    (
        $target:ident from $wire:ident, base $base:ty;
        { $($field:ident: $ty:ty = $rename:literal),* $(,)? }
    ) => {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct $wire {
            #[serde(rename = "_eq", default)]
            eq: Option<$base>,
            #[serde(rename = "_gt", default)]
            gt: Option<$base>,
            #[serde(rename = "_gte", default)]
            gte: Option<$base>,
            #[serde(rename = "_in", default)]
            in_: Option<Vec<$base>>,
            #[serde(rename = "_is_null", default)]
            is_null: Option<bool>,
            #[serde(rename = "_lt", default)]
            lt: Option<$base>,
            #[serde(rename = "_lte", default)]
            lte: Option<$base>,
            #[serde(rename = "_neq", default)]
            neq: Option<$base>,
            #[serde(rename = "_nin", default)]
            nin: Option<Vec<$base>>,
            $(
                #[serde(rename = $rename, default)]
                $field: Option<$ty>,
            )*
        }

        impl From<$wire> for $target {
            fn from(wire: $wire) -> Self {
                Self {
                    base: ComparisonExp {
                        eq: wire.eq,
                        gt: wire.gt,
                        gte: wire.gte,
                        in_: wire.in_,
                        is_null: wire.is_null,
                        lt: wire.lt,
                        lte: wire.lte,
                        neq: wire.neq,
                        nin: wire.nin,
                    },
                    $($field: wire.$field,)*
                }
            }
        }
    };
}

/// Boolean expression to compare columns of type `String`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StringComparisonFields")]
pub struct StringComparisonExp {
    #[serde(flatten)]
    pub base: ComparisonExp<String>,
    /// Case-insensitive LIKE.
    #[serde(rename = "_ilike", default, skip_serializing_if = "Option::is_none")]
    pub ilike: Option<String>,
    /// POSIX case-insensitive regular expression.
    #[serde(rename = "_iregex", default, skip_serializing_if = "Option::is_none")]
    pub iregex: Option<String>,
    #[serde(rename = "_like", default, skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
    #[serde(rename = "_nilike", default, skip_serializing_if = "Option::is_none")]
    pub nilike: Option<String>,
    #[serde(rename = "_niregex", default, skip_serializing_if = "Option::is_none")]
    pub niregex: Option<String>,
    #[serde(rename = "_nlike", default, skip_serializing_if = "Option::is_none")]
    pub nlike: Option<String>,
    #[serde(rename = "_nregex", default, skip_serializing_if = "Option::is_none")]
    pub nregex: Option<String>,
    #[serde(rename = "_nsimilar", default, skip_serializing_if = "Option::is_none")]
    pub nsimilar: Option<String>,
    /// POSIX case-sensitive regular expression.
    #[serde(rename = "_regex", default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// SQL `SIMILAR TO`.
    #[serde(rename = "_similar", default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<String>,
}

flat_comparison! {
    StringComparisonExp from StringComparisonFields, base String;
    {
        ilike: String = "_ilike",
        iregex: String = "_iregex",
        like: String = "_like",
        nilike: String = "_nilike",
        niregex: String = "_niregex",
        nlike: String = "_nlike",
        nregex: String = "_nregex",
        nsimilar: String = "_nsimilar",
        regex: String = "_regex",
        similar: String = "_similar",
    }
}

impl From<ComparisonExp<String>> for StringComparisonExp {
    fn from(base: ComparisonExp<String>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl StringComparisonExp {
    /// `_eq: value`
    #[must_use]
    pub fn eq(value: impl Into<String>) -> Self {
        ComparisonExp::eq(value.into()).into()
    }

    /// `_in: values`
    #[must_use]
    pub fn is_in<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        ComparisonExp::is_in(values.into_iter().map(Into::into)).into()
    }

    /// `_is_null: null`
    #[must_use]
    pub fn null(null: bool) -> Self {
        ComparisonExp::null(null).into()
    }

    /// `_like: pattern`
    #[must_use]
    pub fn like(pattern: impl Into<String>) -> Self {
        Self {
            like: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// `_ilike: pattern`
    #[must_use]
    pub fn ilike(pattern: impl Into<String>) -> Self {
        Self {
            ilike: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// `_regex: pattern`
    #[must_use]
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            regex: Some(pattern.into()),
            ..Self::default()
        }
    }
}

/// Boolean expression to compare columns of type `jsonb`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonbComparisonFields")]
pub struct JsonbComparisonExp {
    #[serde(flatten)]
    pub base: ComparisonExp<serde_json::Value>,
    /// Is the column contained in the given json value.
    #[serde(rename = "_contained_in", default, skip_serializing_if = "Option::is_none")]
    pub contained_in: Option<serde_json::Value>,
    /// Does the column contain the given json value at the top level.
    #[serde(rename = "_contains", default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<serde_json::Value>,
    /// Does the string exist as a top-level key in the column.
    #[serde(rename = "_has_key", default, skip_serializing_if = "Option::is_none")]
    pub has_key: Option<String>,
    /// Do all of these strings exist as top-level keys in the column.
    #[serde(rename = "_has_keys_all", default, skip_serializing_if = "Option::is_none")]
    pub has_keys_all: Option<Vec<String>>,
    /// Do any of these strings exist as top-level keys in the column.
    #[serde(rename = "_has_keys_any", default, skip_serializing_if = "Option::is_none")]
    pub has_keys_any: Option<Vec<String>>,
}

flat_comparison! {
    JsonbComparisonExp from JsonbComparisonFields, base serde_json::Value;
    {
        contained_in: serde_json::Value = "_contained_in",
        contains: serde_json::Value = "_contains",
        has_key: String = "_has_key",
        has_keys_all: Vec<String> = "_has_keys_all",
        has_keys_any: Vec<String> = "_has_keys_any",
    }
}

impl JsonbComparisonExp {
    /// `_contains: value`
    #[must_use]
    pub fn contains(value: serde_json::Value) -> Self {
        Self {
            contains: Some(value),
            ..Self::default()
        }
    }

    /// `_has_key: key`
    #[must_use]
    pub fn has_key(key: impl Into<String>) -> Self {
        Self {
            has_key: Some(key.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_operators_are_omitted() {
        let exp = ComparisonExp::eq(5);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_eq": 5}));
    }

    #[test]
    fn test_between() {
        let exp = ComparisonExp::between(1, 10);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_gte": 1, "_lt": 10})
        );
    }

    #[test]
    fn test_in_and_null() {
        let exp = ComparisonExp::is_in([1, 2, 3]);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_in": [1, 2, 3]}));

        let exp = ComparisonExp::<i32>::null(true);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_is_null": true}));
    }

    #[test]
    fn test_string_operators_flatten_base() {
        let mut exp = StringComparisonExp::ilike("%@example.com");
        exp.base.neq = Some("blocked@example.com".to_string());
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_neq": "blocked@example.com", "_ilike": "%@example.com"})
        );
    }

    #[test]
    fn test_string_deserialize() {
        let exp: StringComparisonExp =
            serde_json::from_value(json!({"_eq": "a", "_regex": "^b"})).unwrap();
        assert_eq!(exp.base.eq.as_deref(), Some("a"));
        assert_eq!(exp.regex.as_deref(), Some("^b"));
    }

    #[test]
    fn test_unknown_operators_are_rejected() {
        assert!(serde_json::from_value::<ComparisonExp<i32>>(json!({"_eqq": 1})).is_err());
        assert!(serde_json::from_value::<StringComparisonExp>(json!({"_eqq": "x"})).is_err());
        assert!(
            serde_json::from_value::<StringComparisonExp>(json!({"_eq": "x", "_contains": "y"}))
                .is_err()
        );
        assert!(serde_json::from_value::<JsonbComparisonExp>(json!({"_like": "%"})).is_err());
    }

    #[test]
    fn test_jsonb_deserialize() {
        let exp: JsonbComparisonExp =
            serde_json::from_value(json!({"_neq": {"a": 1}, "_has_keys_any": ["a", "b"]}))
                .unwrap();
        assert_eq!(exp.base.neq, Some(json!({"a": 1})));
        assert_eq!(exp.has_keys_any.unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_jsonb_operators() {
        let exp = JsonbComparisonExp::contains(json!({"currency": "USDC"}));
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_contains": {"currency": "USDC"}})
        );
        let exp = JsonbComparisonExp::has_key("network");
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_has_key": "network"})
        );
    }
}
