//! `analytics_wallet_signups`

use crate::scalars::{Bigint, Date};

crate::view! {
    /// Daily wallet signups per identity provider.
    pub struct AnalyticsWalletSignups = "analytics_wallet_signups";
    columns {
        ordered {
            AuthProvider auth_provider: Option<String>,
            Day day: Option<Date>,
        }
        numeric {
            SignupCount signup_count: Option<Bigint>,
        }
        jsonb {}
        other {}
    }
    object_relationships {}
}
