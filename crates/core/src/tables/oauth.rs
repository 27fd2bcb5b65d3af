//! `oauth`: third-party applications acting on behalf of sellers.

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// An OAuth client application owned by a seller.
    pub struct Oauth = "oauth";
    primary_key { id: Uuid }
    columns {
        ordered {
            ClientId client_id: String,
            ClientSecretHash client_secret_hash: String,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            Name name: String,
            SellerId seller_id: Uuid,
        }
        numeric {}
        jsonb {
            RedirectUris redirect_uris: Option<Jsonb>,
        }
        other {
            IsActive is_active: bool,
        }
    }
    constraints {
        OauthClientIdKey = "oauth_client_id_key" (client_id),
        OauthPkey = "oauth_pkey" (id),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {
        oauth_access_tokens / oauth_access_tokens_aggregate: super::oauth_access_token::OauthAccessToken,
        oauth_platform_mappings / oauth_platform_mappings_aggregate: super::oauth_platform_mapping::OauthPlatformMapping,
    }
}
