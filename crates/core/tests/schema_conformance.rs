//! Cross-table invariants every table module must satisfy.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use paygraph_core::scalars::is_numeric_scalar;
use paygraph_core::{
    BoolExpr, CursorOrdering, MutableTable, OrderBy, SchemaEnum, Table, TableInfo, TableKind,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// `{ "<column>": null, ... }` for the given keys.
fn nulls<'a>(keys: impl IntoIterator<Item = &'a str>) -> Value {
    Value::Object(
        keys.into_iter()
            .map(|k| (k.to_string(), Value::Null))
            .collect::<Map<_, _>>(),
    )
}

fn literals<E: SchemaEnum>() -> BTreeSet<&'static str> {
    E::ALL.iter().map(|v| v.as_str()).collect()
}

fn column_set(info: &TableInfo) -> BTreeSet<&'static str> {
    info.column_names().collect()
}

fn check_read<T: Table>() {
    let info = T::info();

    // select columns are exactly the columns
    assert_eq!(literals::<T::SelectColumn>(), column_set(info), "{}", info.name);
    assert_eq!(
        <T::SelectColumn as SchemaEnum>::GRAPHQL_NAME,
        format!("{}_select_column", info.name)
    );

    // every column and relationship is a bool_exp key, nothing else is
    let relationship_names = info.relationships.iter().map(|r| r.name);
    let keys = info.column_names().chain(relationship_names);
    let exp: T::BoolExp = serde_json::from_value(nulls(keys)).unwrap();
    assert!(exp.is_empty(), "{}", info.name);
    assert!(serde_json::from_value::<T::BoolExp>(nulls(["not_a_column"])).is_err());

    // composition stays within the same bool_exp
    let b = T::BoolExp::default();
    for composed in [
        T::BoolExp::all(vec![b.clone(), b.clone()]),
        T::BoolExp::any(vec![b.clone()]),
        b.clone().negate(),
    ] {
        let json = serde_json::to_value(&composed).unwrap();
        let back: T::BoolExp = serde_json::from_value(json).unwrap();
        assert_eq!(back, composed);
    }

    // numeric aggregate columns are numeric columns of the entity
    for column in info.numeric_columns {
        let scalar = info.column(column).map(|c| c.scalar);
        assert!(
            scalar.is_some_and(is_numeric_scalar),
            "{}.{column} is aggregated as numeric but is {scalar:?}",
            info.name
        );
    }
    for column in info.columns {
        if is_numeric_scalar(column.scalar) {
            assert!(info.numeric_columns.contains(&column.name), "{}.{}", info.name, column.name);
        }
    }

    // relationship fields are not columns
    for rel in info.relationships {
        assert!(info.column(rel.name).is_none(), "{}.{}", info.name, rel.name);
    }
    // every filter leaf, whatever its scalar, rejects unknown operators
    for column in info.columns {
        let leaf = json!({ column.name: {"_bogus": 1} });
        assert!(
            serde_json::from_value::<T::BoolExp>(leaf).is_err(),
            "{}.{} accepted an unknown operator",
            info.name,
            column.name
        );
    }
}

/// `{"<column>": null}` is an explicit null on nullable columns and a type
/// error (not an unknown key) on the others.
fn check_null_assignment<I>(info: &TableInfo, input: &str)
where
    I: DeserializeOwned + Serialize,
{
    for column in info.columns {
        let body = nulls([column.name]);
        match serde_json::from_value::<I>(body.clone()) {
            Ok(decoded) => {
                // a jsonb value may itself be JSON null
                let accepts_null = column.nullable || column.scalar == "jsonb";
                assert!(accepts_null, "{}.{} in {input}", info.name, column.name);
                assert_eq!(serde_json::to_value(&decoded).unwrap(), body);
            }
            Err(err) => {
                assert!(!column.nullable, "{}.{} in {input}: {err}", info.name, column.name);
                assert!(!err.to_string().contains("unknown field"), "{err}");
            }
        }
    }
}

fn check_mutable<T: MutableTable>() {
    check_read::<T>();
    let info = T::info();
    assert_eq!(info.kind, TableKind::Table);

    // update columns mirror select columns
    assert_eq!(literals::<T::UpdateColumn>(), literals::<T::SelectColumn>(), "{}", info.name);

    // insert and set inputs: every column, plus relationships on insert only
    let columns = literals::<T::SelectColumn>();
    check_null_assignment::<T::InsertInput>(info, "insert");
    check_null_assignment::<T::SetInput>(info, "_set");
    let relationships = info.relationships.iter().map(|r| r.name);
    assert!(serde_json::from_value::<T::InsertInput>(nulls(relationships)).is_ok());
    assert!(serde_json::from_value::<T::InsertInput>(nulls(["not_a_column"])).is_err());
    assert!(serde_json::from_value::<T::SetInput>(nulls(["not_a_column"])).is_err());

    // _inc and the jsonb operators cover exactly their column families
    assert!(
        serde_json::from_value::<T::IncInput>(nulls(info.numeric_columns.iter().copied())).is_ok()
    );
    assert!(
        serde_json::from_value::<T::AppendInput>(nulls(info.jsonb_columns.iter().copied())).is_ok()
    );
    for column in &columns {
        let numeric = info.numeric_columns.contains(column);
        let inc = serde_json::from_value::<T::IncInput>(nulls([*column]));
        assert_eq!(inc.is_ok(), numeric, "{}.{column} in _inc", info.name);
        let jsonb = info.jsonb_columns.contains(column);
        let append = serde_json::from_value::<T::AppendInput>(nulls([*column]));
        assert_eq!(append.is_ok(), jsonb, "{}.{column} in _append", info.name);
    }

    // constraints name real columns; the primary key constraint is `<t>_pkey`
    assert_eq!(
        literals::<T::Constraint>(),
        info.constraints.iter().map(|c| c.name).collect::<BTreeSet<_>>(),
        "{}",
        info.name
    );
    let column_names = column_set(info);
    for constraint in info.constraints {
        for column in constraint.columns {
            assert!(column_names.contains(column), "{}: {column}", constraint.name);
        }
    }
    let pkey = format!("{}_pkey", info.name);
    let pkey = info.constraints.iter().find(|c| c.name == pkey);
    assert_eq!(pkey.is_some(), info.has_primary_key(), "{}", info.name);
    if let Some(pkey) = pkey {
        assert_eq!(pkey.columns, info.primary_key);
    }
}

fn check_view<T: Table>() {
    check_read::<T>();
    let info = T::info();
    assert_eq!(info.kind, TableKind::View);
    assert!(!info.has_primary_key());
    assert!(info.constraints.is_empty());
}

macro_rules! check_all {
    (tables { $($table:ty),* } views { $($view:ty),* }) => {
        $(check_mutable::<$table>();)*
        $(check_view::<$view>();)*
    };
}

#[test]
fn test_every_table_conforms() {
    paygraph_core::for_each_table!(check_all);
}

#[test]
fn test_account_columns() {
    use paygraph_core::tables::account::{Account, SelectColumn};

    assert_eq!(
        literals::<SelectColumn>(),
        BTreeSet::from([
            "convertkit_subscriber_id",
            "created_at",
            "email",
            "full_name",
            "id",
            "role",
            "seller_id",
            "source",
        ])
    );
    let email_key = Account::info()
        .constraints
        .iter()
        .find(|c| c.name == "account_email_key")
        .unwrap();
    assert_eq!(email_key.columns, ["email"]);
}

#[test]
fn test_checkout_limit_is_averaged() {
    use paygraph_core::tables::checkout;

    let avg: checkout::AvgFields =
        serde_json::from_value(json!({"limit_per_transaction": 2.5})).unwrap();
    assert_eq!(avg.limit_per_transaction, Some(2.5));
}

#[test]
fn test_enum_literals() {
    assert_eq!(
        literals::<CursorOrdering>(),
        BTreeSet::from(["ASC", "DESC"])
    );
    assert_eq!(
        literals::<OrderBy>(),
        BTreeSet::from([
            "asc",
            "asc_nulls_first",
            "asc_nulls_last",
            "desc",
            "desc_nulls_first",
            "desc_nulls_last",
        ])
    );
}
