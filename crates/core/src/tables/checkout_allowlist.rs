//! `checkout_allowlist`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// A wallet allowed to buy from a gated checkout.
    pub struct CheckoutAllowlist = "checkout_allowlist";
    primary_key { id: Uuid }
    columns {
        ordered {
            CheckoutId checkout_id: Uuid,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            WalletAddress wallet_address: String,
        }
        numeric {
            MaxQuantity max_quantity: Option<i32>,
        }
        jsonb {}
        other {}
    }
    constraints {
        CheckoutAllowlistCheckoutIdWalletAddressKey = "checkout_allowlist_checkout_id_wallet_address_key" (checkout_id, wallet_address),
        CheckoutAllowlistPkey = "checkout_allowlist_pkey" (id),
    }
    object_relationships { checkout: super::checkout::Checkout }
    array_relationships {}
}
