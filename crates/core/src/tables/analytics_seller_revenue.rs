//! `analytics_seller_revenue`

use crate::scalars::{Bigint, Date, Numeric, Uuid};

crate::view! {
    /// Monthly revenue per seller and currency, net of refunds.
    pub struct AnalyticsSellerRevenue = "analytics_seller_revenue";
    columns {
        ordered {
            Currency currency: Option<String>,
            Month month: Option<Date>,
            SellerId seller_id: Option<Uuid>,
        }
        numeric {
            GrossRevenue gross_revenue: Option<Numeric>,
            NetRevenue net_revenue: Option<Numeric>,
            Refunded refunded: Option<Numeric>,
            TransactionCount transaction_count: Option<Bigint>,
        }
        jsonb {}
        other {}
    }
    object_relationships { seller: super::seller::Seller }
}
