//! Declarative macros that expand one table declaration into every shape the
//! Hasura schema derives from it.
//!
//! A table module is a single [`table!`](crate::table!) (or
//! [`view!`](crate::view!)) invocation. Columns are grouped by the aggregate
//! family they belong to, which is what decides the fields of `min`/`max`,
//! `sum`/`avg`, `_inc` and the jsonb operators:
//!
//! - `ordered`: comparable but not summable (text, uuid, timestamps)
//! - `numeric`: `Int`, `bigint`, `numeric`, `float8`
//! - `jsonb`: `jsonb` columns
//! - `other`: everything else (booleans)
//!
//! # Example
//!
//! ```rust,ignore
//! paygraph_core::table! {
//!     /// An API key issued to a seller.
//!     pub struct ApiKey = "api_key";
//!     primary_key { id: Uuid }
//!     columns {
//!         ordered { Id id: Uuid, Name name: String }
//!         numeric {}
//!         jsonb {}
//!         other { IsRevoked is_revoked: bool }
//!     }
//!     constraints { ApiKeyPkey = "api_key_pkey" (id) }
//!     object_relationships { seller: super::seller::Seller }
//!     array_relationships {}
//! }
//! ```

/// Declares a schema enum whose values serialize as wire literals.
#[doc(hidden)]
#[macro_export]
macro_rules! __schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident = $graphql:expr;
        { $($variant:ident = $literal:expr,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $crate::table::SchemaEnum for $name {
            const GRAPHQL_NAME: &'static str = $graphql;
            const ALL: &'static [Self] = &[$(Self::$variant,)*];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)*
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::table::SchemaEnum::as_str(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::table::SchemaEnum::as_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::table::SchemaEnum>::parse(&value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(::std::format!(
                        "unknown {} value `{}`",
                        $graphql,
                        value
                    ))
                })
            }
        }
    };
}

/// Read side shared by tables and views: entity, filters, ordering,
/// aggregates, stream cursor, metadata and the [`Table`](crate::Table) impl.
#[doc(hidden)]
#[macro_export]
macro_rules! __table_read {
    (
        kind = $kind:ident;
        docs = [$($doc:expr),*];
        entity = $entity:ident;
        name = $name:literal;
        primary_key { $($pk:ident : $pkt:ty),* }
        ordered { $($ov:ident $oc:ident : $ot:ty),* }
        numeric { $($nv:ident $nc:ident : $nt:ty),* }
        jsonb { $($jv:ident $jc:ident : $jt:ty),* }
        other { $($xv:ident $xc:ident : $xt:ty),* }
        constraints { $($cv:ident = $clit:literal ($($ccol:ident),*)),* }
        object_relationships { $($orel:ident : $otarget:ty),* }
        array_relationships { $($arel:ident / $aagg:ident : $atarget:ty),* }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $entity {
            $(pub $oc: $ot,)*
            $(pub $nc: $nt,)*
            $(pub $jc: $jt,)*
            $(pub $xc: $xt,)*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $orel: ::core::option::Option<::std::boxed::Box<$otarget>>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $arel: ::core::option::Option<::std::vec::Vec<$atarget>>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $aagg: ::core::option::Option<$crate::envelope::Aggregate<$atarget>>,
            )*
        }

        $crate::__schema_enum! {
            #[doc = ::core::concat!("select columns of table \"", $name, "\"")]
            SelectColumn = ::core::concat!($name, "_select_column");
            {
                $($ov = ::core::stringify!($oc),)*
                $($nv = ::core::stringify!($nc),)*
                $($jv = ::core::stringify!($jc),)*
                $($xv = ::core::stringify!($xc),)*
            }
        }

        #[doc = ::core::concat!(
            "Boolean expression to filter rows from the table \"", $name,
            "\". All fields are combined with a logical 'AND'."
        )]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct BoolExp {
            #[serde(rename = "_and", default, skip_serializing_if = "Option::is_none")]
            pub and: ::core::option::Option<::std::vec::Vec<BoolExp>>,
            #[serde(rename = "_not", default, skip_serializing_if = "Option::is_none")]
            pub not: ::core::option::Option<::std::boxed::Box<BoolExp>>,
            #[serde(rename = "_or", default, skip_serializing_if = "Option::is_none")]
            pub or: ::core::option::Option<::std::vec::Vec<BoolExp>>,
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $oc: ::core::option::Option<<$ot as $crate::scalars::ScalarType>::Comparison>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<<$nt as $crate::scalars::ScalarType>::Comparison>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<<$jt as $crate::scalars::ScalarType>::Comparison>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $xc: ::core::option::Option<<$xt as $crate::scalars::ScalarType>::Comparison>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $orel: ::core::option::Option<
                    ::std::boxed::Box<<$otarget as $crate::table::Table>::BoolExp>,
                >,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $arel: ::core::option::Option<
                    ::std::boxed::Box<<$atarget as $crate::table::Table>::BoolExp>,
                >,
            )*
        }

        impl $crate::table::BoolExpr for BoolExp {
            fn all(exps: ::std::vec::Vec<Self>) -> Self {
                Self {
                    and: ::core::option::Option::Some(exps),
                    ..::core::default::Default::default()
                }
            }

            fn any(exps: ::std::vec::Vec<Self>) -> Self {
                Self {
                    or: ::core::option::Option::Some(exps),
                    ..::core::default::Default::default()
                }
            }

            fn negate(self) -> Self {
                Self {
                    not: ::core::option::Option::Some(::std::boxed::Box::new(self)),
                    ..::core::default::Default::default()
                }
            }
        }

        #[doc = ::core::concat!("Ordering options when selecting data from \"", $name, "\".")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct OrderByInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $oc: ::core::option::Option<$crate::ordering::OrderBy>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<$crate::ordering::OrderBy>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<$crate::ordering::OrderBy>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $xc: ::core::option::Option<$crate::ordering::OrderBy>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $orel: ::core::option::Option<
                    ::std::boxed::Box<<$otarget as $crate::table::Table>::OrderBy>,
                >,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $aagg: ::core::option::Option<$crate::envelope::AggregateCountOrderBy>,
            )*
        }

        #[doc = ::core::concat!("aggregate fields of \"", $name, "\"")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct AggregateFields {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub count: ::core::option::Option<i32>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub avg: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub max: ::core::option::Option<MinMaxFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub min: ::core::option::Option<MinMaxFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub stddev: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub stddev_pop: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub stddev_samp: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub sum: ::core::option::Option<SumFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub var_pop: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub var_samp: ::core::option::Option<StatFields>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub variance: ::core::option::Option<StatFields>,
        }

        impl $crate::envelope::AggregateCount for AggregateFields {
            fn count(&self) -> ::core::option::Option<i32> {
                self.count
            }
        }

        /// Statistical aggregate (avg, stddev, variance) of the numeric columns.
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct StatFields {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<f64>,
            )*
        }

        pub type AvgFields = StatFields;
        pub type StddevFields = StatFields;
        pub type StddevPopFields = StatFields;
        pub type StddevSampFields = StatFields;
        pub type VarPopFields = StatFields;
        pub type VarSampFields = StatFields;
        pub type VarianceFields = StatFields;

        /// `sum` of the numeric columns, in the column's own type.
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct SumFields {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<<$nt as $crate::scalars::ScalarType>::Base>,
            )*
        }

        /// `min`/`max` of the orderable columns.
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct MinMaxFields {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $oc: ::core::option::Option<<$ot as $crate::scalars::ScalarType>::Base>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<<$nt as $crate::scalars::ScalarType>::Base>,
            )*
        }

        pub type MinFields = MinMaxFields;
        pub type MaxFields = MinMaxFields;

        #[doc = ::core::concat!("Initial value of the column from where the streaming should start (\"", $name, "\").")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct StreamCursorValueInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $oc: ::core::option::Option<<$ot as $crate::scalars::ScalarType>::Base>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<<$nt as $crate::scalars::ScalarType>::Base>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<<$jt as $crate::scalars::ScalarType>::Base>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $xc: ::core::option::Option<<$xt as $crate::scalars::ScalarType>::Base>,
            )*
        }

        pub type Aggregate = $crate::envelope::Aggregate<$entity>;
        pub type StreamCursorInput = $crate::envelope::StreamCursorInput<$entity>;

        impl $crate::table::Table for $entity {
            type SelectColumn = SelectColumn;
            type BoolExp = BoolExp;
            type OrderBy = OrderByInput;
            type AggregateFields = AggregateFields;
            type StreamCursorValue = StreamCursorValueInput;

            fn info() -> &'static $crate::table::TableInfo {
                &INFO
            }
        }

        static INFO: $crate::table::TableInfo = $crate::table::TableInfo {
            name: $name,
            kind: $crate::table::TableKind::$kind,
            doc: &[$($doc),*],
            columns: &[
                $($crate::__column_info!($oc: $ot),)*
                $($crate::__column_info!($nc: $nt),)*
                $($crate::__column_info!($jc: $jt),)*
                $($crate::__column_info!($xc: $xt),)*
            ],
            primary_key: &[$(::core::stringify!($pk)),*],
            numeric_columns: &[$(::core::stringify!($nc)),*],
            ordered_columns: &[$(::core::stringify!($oc),)* $(::core::stringify!($nc),)*],
            jsonb_columns: &[$(::core::stringify!($jc)),*],
            constraints: &[
                $(
                    $crate::table::ConstraintInfo {
                        name: $clit,
                        columns: &[$(::core::stringify!($ccol)),*],
                    },
                )*
            ],
            relationships: &[
                $(
                    $crate::table::RelationshipInfo {
                        name: ::core::stringify!($orel),
                        kind: $crate::table::RelationshipKind::Object,
                        aggregate_field: ::core::option::Option::None,
                        target: <$otarget as $crate::table::Table>::info,
                    },
                )*
                $(
                    $crate::table::RelationshipInfo {
                        name: ::core::stringify!($arel),
                        kind: $crate::table::RelationshipKind::Array,
                        aggregate_field: ::core::option::Option::Some(::core::stringify!($aagg)),
                        target: <$atarget as $crate::table::Table>::info,
                    },
                )*
            ],
        };
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __column_info {
    ($column:ident : $ty:ty) => {
        $crate::table::ColumnInfo {
            name: ::core::stringify!($column),
            scalar: <$ty as $crate::scalars::ScalarType>::GRAPHQL_NAME,
            nullable: <$ty as $crate::scalars::ScalarType>::NULLABLE,
        }
    };
}

/// Declares a tracked table: the read side plus every mutation input and the
/// primary key input.
#[macro_export]
macro_rules! table {
    (
        $(#[doc = $doc:expr])*
        pub struct $entity:ident = $name:literal;
        primary_key { $($pk:ident : $pkt:ty),* $(,)? }
        columns {
            ordered { $($ov:ident $oc:ident : $ot:ty),* $(,)? }
            numeric { $($nv:ident $nc:ident : $nt:ty),* $(,)? }
            jsonb { $($jv:ident $jc:ident : $jt:ty),* $(,)? }
            other { $($xv:ident $xc:ident : $xt:ty),* $(,)? }
        }
        constraints { $($cv:ident = $clit:literal ($($ccol:ident),* $(,)?)),* $(,)? }
        object_relationships { $($orel:ident : $otarget:ty),* $(,)? }
        array_relationships { $($arel:ident / $aagg:ident : $atarget:ty),* $(,)? }
    ) => {
        $crate::__table_read! {
            kind = Table;
            docs = [$($doc),*];
            entity = $entity;
            name = $name;
            primary_key { $($pk : $pkt),* }
            ordered { $($ov $oc : $ot),* }
            numeric { $($nv $nc : $nt),* }
            jsonb { $($jv $jc : $jt),* }
            other { $($xv $xc : $xt),* }
            constraints { $($cv = $clit ($($ccol),*)),* }
            object_relationships { $($orel : $otarget),* }
            array_relationships { $($arel / $aagg : $atarget),* }
        }

        $crate::__schema_enum! {
            #[doc = ::core::concat!("update columns of table \"", $name, "\"")]
            UpdateColumn = ::core::concat!($name, "_update_column");
            {
                $($ov = ::core::stringify!($oc),)*
                $($nv = ::core::stringify!($nc),)*
                $($jv = ::core::stringify!($jc),)*
                $($xv = ::core::stringify!($xc),)*
            }
        }

        $crate::__schema_enum! {
            #[doc = ::core::concat!("unique or primary key constraints on table \"", $name, "\"")]
            Constraint = ::core::concat!($name, "_constraint");
            { $($cv = $clit,)* }
        }

        // Column fields are `Option<column type>`: `None` leaves the column
        // out, `Some(None)` on a nullable column sends an explicit `null`.
        #[doc = ::core::concat!("input type for inserting data into table \"", $name, "\"")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct InsertInput {
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $oc: ::core::option::Option<$ot>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $nc: ::core::option::Option<$nt>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $jc: ::core::option::Option<$jt>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $xc: ::core::option::Option<$xt>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $orel: ::core::option::Option<
                    ::std::boxed::Box<$crate::envelope::ObjRelInsertInput<$otarget>>,
                >,
            )*
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $arel: ::core::option::Option<$crate::envelope::ArrRelInsertInput<$atarget>>,
            )*
        }

        #[doc = ::core::concat!("input type for updating data in table \"", $name, "\"")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct SetInput {
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $oc: ::core::option::Option<$ot>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $nc: ::core::option::Option<$nt>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $jc: ::core::option::Option<$jt>,
            )*
            $(
                #[serde(
                    default,
                    deserialize_with = "::paygraph_core::scalars::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $xc: ::core::option::Option<$xt>,
            )*
        }

        #[doc = ::core::concat!("input type for incrementing numeric columns in table \"", $name, "\"")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct IncInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $nc: ::core::option::Option<<$nt as $crate::scalars::ScalarType>::Base>,
            )*
        }

        /// append existing jsonb value of filtered columns with new jsonb value
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct AppendInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<$crate::scalars::Jsonb>,
            )*
        }

        /// prepend existing jsonb value of filtered columns with new jsonb value
        pub type PrependInput = AppendInput;

        /// delete key/value pair or string element. key/value pairs are matched based on their key value
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct DeleteKeyInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<::std::string::String>,
            )*
        }

        /// delete the array element with specified index (negative integers count from the end)
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct DeleteElemInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<i32>,
            )*
        }

        /// delete the field or element with specified path (for JSON arrays, negative integers count from the end)
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct DeleteAtPathInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $jc: ::core::option::Option<::std::vec::Vec<::std::string::String>>,
            )*
        }

        #[doc = ::core::concat!("primary key columns input for table: \"", $name, "\"")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct PkColumnsInput {
            $(pub $pk: $pkt,)*
        }

        pub type MutationResponse = $crate::envelope::MutationResponse<$entity>;
        pub type OnConflict = $crate::envelope::OnConflict<$entity>;
        pub type ObjRelInsertInput = $crate::envelope::ObjRelInsertInput<$entity>;
        pub type ArrRelInsertInput = $crate::envelope::ArrRelInsertInput<$entity>;
        pub type Updates = $crate::envelope::Updates<$entity>;

        impl $crate::table::MutableTable for $entity {
            type UpdateColumn = UpdateColumn;
            type Constraint = Constraint;
            type InsertInput = InsertInput;
            type SetInput = SetInput;
            type IncInput = IncInput;
            type AppendInput = AppendInput;
            type DeleteKeyInput = DeleteKeyInput;
            type DeleteElemInput = DeleteElemInput;
            type DeleteAtPathInput = DeleteAtPathInput;
        }

        impl $crate::table::KeyedTable for $entity {
            type PkColumns = PkColumnsInput;
        }
    };
}

/// Declares a read-only view: no primary key, no mutations, object
/// relationships only.
#[macro_export]
macro_rules! view {
    (
        $(#[doc = $doc:expr])*
        pub struct $entity:ident = $name:literal;
        columns {
            ordered { $($ov:ident $oc:ident : $ot:ty),* $(,)? }
            numeric { $($nv:ident $nc:ident : $nt:ty),* $(,)? }
            jsonb { $($jv:ident $jc:ident : $jt:ty),* $(,)? }
            other { $($xv:ident $xc:ident : $xt:ty),* $(,)? }
        }
        object_relationships { $($orel:ident : $otarget:ty),* $(,)? }
    ) => {
        $crate::__table_read! {
            kind = View;
            docs = [$($doc),*];
            entity = $entity;
            name = $name;
            primary_key {}
            ordered { $($ov $oc : $ot),* }
            numeric { $($nv $nc : $nt),* }
            jsonb { $($jv $jc : $jt),* }
            other { $($xv $xc : $xt),* }
            constraints {}
            object_relationships { $($orel : $otarget),* }
            array_relationships {}
        }
    };
}
