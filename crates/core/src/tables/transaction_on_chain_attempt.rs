//! `transaction_on_chain_attempt`

use crate::scalars::{Bigint, Timestamptz, Uuid};

crate::table! {
    /// One blockchain submission of a transaction.
    pub struct TransactionOnChainAttempt = "transaction_on_chain_attempt";
    primary_key { id: Uuid }
    columns {
        ordered {
            Chain chain: String,
            CreatedAt created_at: Timestamptz,
            ErrorMessage error_message: Option<String>,
            Id id: Uuid,
            Status status: String,
            TransactionHash transaction_hash: Option<String>,
            TransactionId transaction_id: Uuid,
        }
        numeric {
            AttemptNumber attempt_number: i32,
            GasUsed gas_used: Option<Bigint>,
        }
        jsonb {}
        other {}
    }
    constraints {
        TransactionOnChainAttemptPkey = "transaction_on_chain_attempt_pkey" (id),
        TransactionOnChainAttemptTransactionIdAttemptNumberKey = "transaction_on_chain_attempt_transaction_id_attempt_number_key" (transaction_id, attempt_number),
    }
    object_relationships { transaction: super::transaction::Transaction }
    array_relationships {}
}
