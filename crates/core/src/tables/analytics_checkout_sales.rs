//! `analytics_checkout_sales`

use crate::scalars::{Bigint, Date, Numeric, Uuid};

crate::view! {
    /// Daily sales per checkout.
    pub struct AnalyticsCheckoutSales = "analytics_checkout_sales";
    columns {
        ordered {
            CheckoutId checkout_id: Option<Uuid>,
            Day day: Option<Date>,
            SellerId seller_id: Option<Uuid>,
        }
        numeric {
            QuantitySold quantity_sold: Option<Bigint>,
            Revenue revenue: Option<Numeric>,
            SalesCount sales_count: Option<Bigint>,
        }
        jsonb {}
        other {}
    }
    object_relationships {
        checkout: super::checkout::Checkout,
        seller: super::seller::Seller,
    }
}
