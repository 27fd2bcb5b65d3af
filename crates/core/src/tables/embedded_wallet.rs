//! `embedded_wallet`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A custodial wallet address derived for a wallet user on one chain.
    pub struct EmbeddedWallet = "embedded_wallet";
    primary_key { id: Uuid }
    columns {
        ordered {
            Address address: String,
            Chain chain: String,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            WalletUserId wallet_user_id: Uuid,
        }
        numeric {
            KeyVersion key_version: i32,
        }
        jsonb {}
        other {}
    }
    constraints {
        EmbeddedWalletAddressChainKey = "embedded_wallet_address_chain_key" (address, chain),
        EmbeddedWalletPkey = "embedded_wallet_pkey" (id),
    }
    object_relationships { wallet_user: super::wallet_user::WalletUser }
    array_relationships {}
}
