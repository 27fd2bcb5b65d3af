//! `share`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// An encrypted key share of a wallet user's signing key.
    pub struct Share = "share";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            EncryptedShare encrypted_share: String,
            Id id: Uuid,
            ShareType share_type: String,
            WalletUserId wallet_user_id: Uuid,
        }
        numeric {
            ShareIndex share_index: i32,
        }
        jsonb {}
        other {}
    }
    constraints {
        SharePkey = "share_pkey" (id),
        ShareWalletUserIdShareIndexKey = "share_wallet_user_id_share_index_key" (wallet_user_id, share_index),
    }
    object_relationships { wallet_user: super::wallet_user::WalletUser }
    array_relationships {}
}
