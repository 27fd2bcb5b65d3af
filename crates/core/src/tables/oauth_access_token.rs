//! `oauth_access_token`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// An access token issued to an OAuth application.
    pub struct OauthAccessToken = "oauth_access_token";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            ExpiresAt expires_at: Timestamptz,
            Id id: Uuid,
            OauthId oauth_id: Uuid,
            Scope scope: String,
            TokenHash token_hash: String,
        }
        numeric {}
        jsonb {}
        other {
            IsRevoked is_revoked: bool,
        }
    }
    constraints {
        OauthAccessTokenPkey = "oauth_access_token_pkey" (id),
        OauthAccessTokenTokenHashKey = "oauth_access_token_token_hash_key" (token_hash),
    }
    object_relationships { oauth: super::oauth::Oauth }
    array_relationships {}
}
