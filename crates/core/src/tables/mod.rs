//! Every tracked table and view of the schema, one module each.
//!
//! Each module is a single [`table!`](crate::table!) or
//! [`view!`](crate::view!) declaration and exports the same set of names
//! (`BoolExp`, `OrderByInput`, `InsertInput`, `SelectColumn`, ...), so
//! `checkout::BoolExp` and `seller::BoolExp` read the same way.

use crate::table::{Table, TableInfo};

pub mod account;
pub mod airdrop;
pub mod analytics_checkout_sales;
pub mod analytics_seller_revenue;
pub mod analytics_wallet_signups;
pub mod analytics_webhook_delivery;
pub mod api_key;
pub mod buyer;
pub mod checkout;
pub mod checkout_allowlist;
pub mod contract;
pub mod contract_authorized_seller;
pub mod customer;
pub mod embedded_wallet;
pub mod ews_authed_user;
pub mod oauth;
pub mod oauth_access_token;
pub mod oauth_platform_mapping;
pub mod seller;
pub mod share;
pub mod transaction;
pub mod transaction_on_chain_attempt;
pub mod transaction_refund;
pub mod wallet_user;
pub mod webhook;
pub mod webhook_event;

/// Invokes `$callback!` with the entity path of every table and view.
///
/// ```rust,ignore
/// macro_rules! count {
///     (tables { $($t:ty),* } views { $($v:ty),* }) => { [$(stringify!($t)),*].len() };
/// }
/// let tables = paygraph_core::for_each_table!(count);
/// ```
#[macro_export]
macro_rules! for_each_table {
    ($callback:ident) => {
        $callback! {
            tables {
                $crate::tables::account::Account,
                $crate::tables::airdrop::Airdrop,
                $crate::tables::api_key::ApiKey,
                $crate::tables::buyer::Buyer,
                $crate::tables::checkout::Checkout,
                $crate::tables::checkout_allowlist::CheckoutAllowlist,
                $crate::tables::contract::Contract,
                $crate::tables::contract_authorized_seller::ContractAuthorizedSeller,
                $crate::tables::customer::Customer,
                $crate::tables::embedded_wallet::EmbeddedWallet,
                $crate::tables::ews_authed_user::EwsAuthedUser,
                $crate::tables::oauth::Oauth,
                $crate::tables::oauth_access_token::OauthAccessToken,
                $crate::tables::oauth_platform_mapping::OauthPlatformMapping,
                $crate::tables::seller::Seller,
                $crate::tables::share::Share,
                $crate::tables::transaction::Transaction,
                $crate::tables::transaction_on_chain_attempt::TransactionOnChainAttempt,
                $crate::tables::transaction_refund::TransactionRefund,
                $crate::tables::wallet_user::WalletUser,
                $crate::tables::webhook::Webhook,
                $crate::tables::webhook_event::WebhookEvent
            }
            views {
                $crate::tables::analytics_checkout_sales::AnalyticsCheckoutSales,
                $crate::tables::analytics_seller_revenue::AnalyticsSellerRevenue,
                $crate::tables::analytics_wallet_signups::AnalyticsWalletSignups,
                $crate::tables::analytics_webhook_delivery::AnalyticsWebhookDelivery
            }
        }
    };
}

macro_rules! infos {
    (tables { $($table:ty),* } views { $($view:ty),* }) => {
        [$(<$table as Table>::info,)* $(<$view as Table>::info,)*]
    };
}

static ALL: [fn() -> &'static TableInfo; 26] = crate::for_each_table!(infos);

/// Metadata of every table and view, tables first, each group sorted by name.
pub fn all() -> impl Iterator<Item = &'static TableInfo> {
    ALL.iter().map(|info| info())
}

/// Look a table or view up by its schema name.
#[must_use]
pub fn find(name: &str) -> Option<&'static TableInfo> {
    all().find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableKind;

    #[test]
    fn test_all_counts() {
        assert_eq!(all().filter(|t| t.kind == TableKind::Table).count(), 22);
        assert_eq!(all().filter(|t| t.kind == TableKind::View).count(), 4);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = all().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("webhook_event").map(|t| t.name), Some("webhook_event"));
        assert!(find("analytics_seller_revenue").is_some_and(|t| !t.is_mutable()));
        assert!(find("orders").is_none());
    }

    #[test]
    fn test_relationship_targets_resolve() {
        for info in all() {
            for rel in info.relationships {
                let target = (rel.target)();
                assert!(find(target.name).is_some(), "{}.{}", info.name, rel.name);
            }
        }
    }
}
