//! `account`: dashboard login of a seller's team member.

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A dashboard user. Belongs to at most one seller.
    pub struct Account = "account";
    primary_key { id: Uuid }
    columns {
        ordered {
            ConvertkitSubscriberId convertkit_subscriber_id: Option<String>,
            CreatedAt created_at: Timestamptz,
            Email email: String,
            FullName full_name: Option<String>,
            Id id: Uuid,
            Role role: String,
            SellerId seller_id: Option<Uuid>,
            Source source: Option<String>,
        }
        numeric {}
        jsonb {}
        other {}
    }
    constraints {
        AccountEmailKey = "account_email_key" (email),
        AccountPkey = "account_pkey" (id),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {}
}
