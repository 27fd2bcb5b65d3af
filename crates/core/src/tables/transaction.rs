//! `transaction`: one purchase against a checkout.

use crate::scalars::{Bigint, Jsonb, Numeric, Timestamptz, Uuid};

crate::table! {
    /// A purchase attempt. Settlement on chain is tracked per attempt in
    /// `transaction_on_chain_attempt`.
    pub struct Transaction = "transaction";
    primary_key { id: Uuid }
    columns {
        ordered {
            BuyerId buyer_id: Option<Uuid>,
            CheckoutId checkout_id: Uuid,
            CreatedAt created_at: Timestamptz,
            Currency currency: String,
            CustomerId customer_id: Option<Uuid>,
            Email email: Option<String>,
            Id id: Uuid,
            PaymentMethod payment_method: String,
            Status status: String,
            UpdatedAt updated_at: Option<Timestamptz>,
            WalletAddress wallet_address: Option<String>,
        }
        numeric {
            AmountCents amount_cents: Bigint,
            FeeAmount fee_amount: Option<Numeric>,
            Quantity quantity: i32,
        }
        jsonb {
            Metadata metadata: Option<Jsonb>,
        }
        other {
            IsTest is_test: bool,
        }
    }
    constraints {
        TransactionPkey = "transaction_pkey" (id),
    }
    object_relationships {
        buyer: super::buyer::Buyer,
        checkout: super::checkout::Checkout,
        customer: super::customer::Customer,
    }
    array_relationships {
        transaction_on_chain_attempts / transaction_on_chain_attempts_aggregate: super::transaction_on_chain_attempt::TransactionOnChainAttempt,
        transaction_refunds / transaction_refunds_aggregate: super::transaction_refund::TransactionRefund,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::table::Table;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_numeric_columns() {
        assert_eq!(
            Transaction::info().numeric_columns,
            ["amount_cents", "fee_amount", "quantity"]
        );
    }

    #[test]
    fn test_sum_keeps_column_types() {
        let sum: SumFields = serde_json::from_value(json!({
            "amount_cents": 123_456_789_012_i64,
            "fee_amount": "12.50",
            "quantity": 3
        }))
        .unwrap();
        assert_eq!(sum.amount_cents, Some(123_456_789_012));
        assert_eq!(sum.fee_amount, Some(Decimal::new(1250, 2)));
        assert_eq!(sum.quantity, Some(3));
    }

    #[test]
    fn test_inc_input_only_numeric() {
        let inc: Result<IncInput, _> = serde_json::from_value(json!({"status": "paid"}));
        assert!(inc.is_err());
        let inc: IncInput = serde_json::from_value(json!({"quantity": 1})).unwrap();
        assert_eq!(inc.quantity, Some(1));
    }

    #[test]
    fn test_jsonb_update_inputs() {
        let append = AppendInput {
            metadata: Some(json!({"source": "api"})),
        };
        assert_eq!(
            serde_json::to_value(&append).unwrap(),
            json!({"metadata": {"source": "api"}})
        );
        let path = DeleteAtPathInput {
            metadata: Some(vec!["utm".to_string(), "campaign".to_string()]),
        };
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            json!({"metadata": ["utm", "campaign"]})
        );
    }
}
