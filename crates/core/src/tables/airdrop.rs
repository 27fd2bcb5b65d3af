//! `airdrop`

use crate::scalars::{Bigint, Jsonb, Timestamptz, Uuid};

crate::table! {
    /// A batch of tokens minted directly to a recipient from a contract.
    pub struct Airdrop = "airdrop";
    primary_key { id: Uuid }
    columns {
        ordered {
            ContractId contract_id: Uuid,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            RecipientAddress recipient_address: String,
            Status status: String,
            TransactionHash transaction_hash: Option<String>,
        }
        numeric {
            Quantity quantity: i32,
            TokenId token_id: Option<Bigint>,
        }
        jsonb {
            Metadata metadata: Option<Jsonb>,
        }
        other {}
    }
    constraints {
        AirdropPkey = "airdrop_pkey" (id),
    }
    object_relationships { contract: super::contract::Contract }
    array_relationships {}
}
