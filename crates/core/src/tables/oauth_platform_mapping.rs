//! `oauth_platform_mapping`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// Maps a user of an OAuth platform to a seller.
    pub struct OauthPlatformMapping = "oauth_platform_mapping";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            OauthId oauth_id: Uuid,
            Platform platform: String,
            PlatformUserId platform_user_id: String,
            SellerId seller_id: Option<Uuid>,
        }
        numeric {}
        jsonb {}
        other {}
    }
    constraints {
        OauthPlatformMappingOauthIdPlatformUserIdKey = "oauth_platform_mapping_oauth_id_platform_user_id_key" (oauth_id, platform_user_id),
        OauthPlatformMappingPkey = "oauth_platform_mapping_pkey" (id),
    }
    object_relationships {
        oauth: super::oauth::Oauth,
        seller: super::seller::Seller,
    }
    array_relationships {}
}
