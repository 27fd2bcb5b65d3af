//! `buyer`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A wallet that has purchased through any checkout.
    pub struct Buyer = "buyer";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Email email: Option<String>,
            Id id: Uuid,
            WalletAddress wallet_address: String,
        }
        numeric {}
        jsonb {}
        other {}
    }
    constraints {
        BuyerPkey = "buyer_pkey" (id),
        BuyerWalletAddressKey = "buyer_wallet_address_key" (wallet_address),
    }
    object_relationships {}
    array_relationships {
        transactions / transactions_aggregate: super::transaction::Transaction,
    }
}
