//! `checkout`: a configured payment flow selling from one contract.

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// A checkout page configured by a seller.
    ///
    /// `price` and `mint_method` are free-form jsonb documents interpreted by
    /// the payment services; this crate passes them through untouched.
    pub struct Checkout = "checkout";
    primary_key { id: Uuid }
    columns {
        ordered {
            CancelCallbackUrl cancel_callback_url: Option<String>,
            ContractId contract_id: Option<Uuid>,
            CreatedAt created_at: Timestamptz,
            Description description: Option<String>,
            Id id: Uuid,
            ImageUrl image_url: Option<String>,
            SellerId seller_id: Uuid,
            SuccessCallbackUrl success_callback_url: Option<String>,
            Title title: Option<String>,
            UpdatedAt updated_at: Option<Timestamptz>,
        }
        numeric {
            LimitPerTransaction limit_per_transaction: Option<i32>,
            LimitPerWallet limit_per_wallet: Option<i32>,
            TotalSupply total_supply: Option<i32>,
        }
        jsonb {
            ContractArgs contract_args: Option<Jsonb>,
            MintMethod mint_method: Option<Jsonb>,
            Price price: Option<Jsonb>,
        }
        other {
            HideQuantityInput hide_quantity_input: Option<bool>,
            IsArchived is_archived: bool,
            RedirectAfterPayment redirect_after_payment: Option<bool>,
        }
    }
    constraints {
        CheckoutPkey = "checkout_pkey" (id),
    }
    object_relationships {
        contract: super::contract::Contract,
        seller: super::seller::Seller,
    }
    array_relationships {
        checkout_allowlists / checkout_allowlists_aggregate: super::checkout_allowlist::CheckoutAllowlist,
        transactions / transactions_aggregate: super::transaction::Transaction,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::comparison::{ComparisonExp, StringComparisonExp};
    use crate::envelope::ObjRelInsertInput;
    use crate::table::BoolExpr;
    use serde_json::json;

    #[test]
    fn test_nested_bool_exp() {
        let filter = BoolExp {
            seller: Some(Box::new(crate::tables::seller::BoolExp {
                name: Some(StringComparisonExp::ilike("%labs%")),
                ..Default::default()
            })),
            ..Default::default()
        }
        .and(BoolExp {
            limit_per_transaction: Some(ComparisonExp::lte(5)),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"_and": [
                {"seller": {"name": {"_ilike": "%labs%"}}},
                {"limit_per_transaction": {"_lte": 5}}
            ]})
        );
    }

    #[test]
    fn test_nested_insert() {
        let input = InsertInput {
            title: Some(Some("Genesis drop".to_string())),
            price: Some(Some(json!({"currency": "USDC", "value": "10.00"}))),
            contract: Some(Box::new(ObjRelInsertInput {
                data: crate::tables::contract::InsertInput {
                    chain: Some("polygon".to_string()),
                    ..Default::default()
                },
                on_conflict: None,
            })),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "title": "Genesis drop",
                "price": {"currency": "USDC", "value": "10.00"},
                "contract": {"data": {"chain": "polygon"}}
            })
        );
    }

    #[test]
    fn test_set_clears_nullable_column() {
        let set = SetInput {
            title: Some(None),
            is_archived: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"title": null, "is_archived": true})
        );

        let decoded: SetInput = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(decoded.title, Some(None));
        assert_eq!(decoded.description, None);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), json!({"title": null}));

        // not-null columns cannot be cleared
        assert!(serde_json::from_value::<SetInput>(json!({"is_archived": null})).is_err());
    }

    #[test]
    fn test_bool_exp_rejects_unknown_operators() {
        let result = serde_json::from_value::<BoolExp>(json!({"title": {"_eqq": "x"}}));
        assert!(result.is_err());
        let result = serde_json::from_value::<BoolExp>(json!({"price": {"_has_key": "a", "_ilike": "%"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_aggregate_fields_decode() {
        let aggregate: Aggregate = serde_json::from_value(json!({
            "aggregate": {
                "count": 2,
                "sum": {"limit_per_transaction": 15, "limit_per_wallet": null, "total_supply": 100},
                "avg": {"limit_per_transaction": 7.5},
                "max": {"created_at": "2024-05-01T00:00:00+00:00", "title": "b"}
            },
            "nodes": []
        }))
        .unwrap();
        let fields = aggregate.aggregate.unwrap();
        assert_eq!(fields.count, Some(2));
        assert_eq!(fields.sum.unwrap().limit_per_transaction, Some(15));
        assert_eq!(fields.avg.unwrap().limit_per_transaction, Some(7.5));
        assert_eq!(fields.max.unwrap().title.as_deref(), Some("b"));
    }

    #[test]
    fn test_order_by_relationship_and_count() {
        let order = OrderByInput {
            seller: Some(Box::new(crate::tables::seller::OrderByInput {
                name: Some(crate::OrderBy::Asc),
                ..Default::default()
            })),
            transactions_aggregate: Some(crate::AggregateCountOrderBy {
                count: Some(crate::OrderBy::DescNullsLast),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "seller": {"name": "asc"},
                "transactions_aggregate": {"count": "desc_nulls_last"}
            })
        );
    }
}
