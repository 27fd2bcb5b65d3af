//! `ews_authed_user`

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// An identity-provider login bound to a wallet user.
    pub struct EwsAuthedUser = "ews_authed_user";
    primary_key { id: Uuid }
    columns {
        ordered {
            AuthIdentifier auth_identifier: String,
            AuthProvider auth_provider: String,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            LastAuthedAt last_authed_at: Option<Timestamptz>,
            WalletUserId wallet_user_id: Uuid,
        }
        numeric {}
        jsonb {
            AuthDetails auth_details: Option<Jsonb>,
        }
        other {}
    }
    constraints {
        EwsAuthedUserAuthProviderAuthIdentifierKey = "ews_authed_user_auth_provider_auth_identifier_key" (auth_provider, auth_identifier),
        EwsAuthedUserPkey = "ews_authed_user_pkey" (id),
    }
    object_relationships { wallet_user: super::wallet_user::WalletUser }
    array_relationships {}
}
