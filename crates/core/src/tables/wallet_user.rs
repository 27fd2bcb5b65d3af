//! `wallet_user`: identity behind custodial wallets.

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// The owner of one or more embedded wallets.
    pub struct WalletUser = "wallet_user";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Email email: Option<String>,
            Id id: Uuid,
            LastLoginAt last_login_at: Option<Timestamptz>,
            PhoneNumber phone_number: Option<String>,
        }
        numeric {}
        jsonb {}
        other {
            IsRecoveryEnabled is_recovery_enabled: bool,
        }
    }
    constraints {
        WalletUserEmailKey = "wallet_user_email_key" (email),
        WalletUserPkey = "wallet_user_pkey" (id),
    }
    object_relationships {}
    array_relationships {
        embedded_wallets / embedded_wallets_aggregate: super::embedded_wallet::EmbeddedWallet,
        ews_authed_users / ews_authed_users_aggregate: super::ews_authed_user::EwsAuthedUser,
        shares / shares_aggregate: super::share::Share,
    }
}
