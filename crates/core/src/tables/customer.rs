//! `customer`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A buyer as seen by one seller (per-seller email identity).
    pub struct Customer = "customer";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Email email: String,
            Id id: Uuid,
            SellerId seller_id: Uuid,
            StripeCustomerId stripe_customer_id: Option<String>,
            WalletAddress wallet_address: Option<String>,
        }
        numeric {}
        jsonb {}
        other {}
    }
    constraints {
        CustomerPkey = "customer_pkey" (id),
        CustomerSellerIdEmailKey = "customer_seller_id_email_key" (seller_id, email),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {
        transactions / transactions_aggregate: super::transaction::Transaction,
    }
}
