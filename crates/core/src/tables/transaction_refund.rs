//! `transaction_refund`

use crate::scalars::{Bigint, Timestamptz, Uuid};

crate::table! {
    /// A full or partial refund of a transaction.
    pub struct TransactionRefund = "transaction_refund";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            Reason reason: Option<String>,
            RefundedAt refunded_at: Option<Timestamptz>,
            Status status: String,
            TransactionId transaction_id: Uuid,
        }
        numeric {
            AmountCents amount_cents: Bigint,
        }
        jsonb {}
        other {}
    }
    constraints {
        TransactionRefundPkey = "transaction_refund_pkey" (id),
    }
    object_relationships { transaction: super::transaction::Transaction }
    array_relationships {}
}
