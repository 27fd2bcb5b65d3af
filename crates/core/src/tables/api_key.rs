//! `api_key`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A server-side API key issued to a seller. Only the hash is stored.
    pub struct ApiKey = "api_key";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            KeyHash key_hash: String,
            KeyPrefix key_prefix: String,
            LastUsedAt last_used_at: Option<Timestamptz>,
            Name name: Option<String>,
            SellerId seller_id: Uuid,
        }
        numeric {}
        jsonb {}
        other {
            IsRevoked is_revoked: bool,
        }
    }
    constraints {
        ApiKeyKeyHashKey = "api_key_key_hash_key" (key_hash),
        ApiKeyPkey = "api_key_pkey" (id),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {}
}
