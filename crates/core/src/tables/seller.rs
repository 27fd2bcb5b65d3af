//! `seller`: the top-level merchant every other record hangs off.

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// A merchant organization.
    pub struct Seller = "seller";
    primary_key { id: Uuid }
    columns {
        ordered {
            CompanyName company_name: Option<String>,
            CreatedAt created_at: Timestamptz,
            Email email: String,
            Id id: Uuid,
            Name name: String,
            StripeAccountId stripe_account_id: Option<String>,
            SupportEmail support_email: Option<String>,
        }
        numeric {
            FeeBps fee_bps: i32,
        }
        jsonb {
            Branding branding: Option<Jsonb>,
        }
        other {
            IsTestMode is_test_mode: bool,
        }
    }
    constraints {
        SellerPkey = "seller_pkey" (id),
    }
    object_relationships {}
    array_relationships {
        accounts / accounts_aggregate: super::account::Account,
        checkouts / checkouts_aggregate: super::checkout::Checkout,
        contracts / contracts_aggregate: super::contract::Contract,
        customers / customers_aggregate: super::customer::Customer,
        oauths / oauths_aggregate: super::oauth::Oauth,
        webhooks / webhooks_aggregate: super::webhook::Webhook,
    }
}
