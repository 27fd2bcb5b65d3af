//! `analytics_webhook_delivery`

use crate::scalars::{Bigint, Timestamp, Uuid};

crate::view! {
    /// Hourly delivery outcomes per webhook.
    pub struct AnalyticsWebhookDelivery = "analytics_webhook_delivery";
    columns {
        ordered {
            Hour hour: Option<Timestamp>,
            SellerId seller_id: Option<Uuid>,
            WebhookId webhook_id: Option<Uuid>,
        }
        numeric {
            AvgAttempts avg_attempts: Option<f64>,
            DeliveredCount delivered_count: Option<Bigint>,
            FailedCount failed_count: Option<Bigint>,
        }
        jsonb {}
        other {}
    }
    object_relationships { webhook: super::webhook::Webhook }
}
