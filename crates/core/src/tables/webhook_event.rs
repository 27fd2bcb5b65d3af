//! `webhook_event`: delivery record of one notification.

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// A notification queued for delivery to a webhook.
    pub struct WebhookEvent = "webhook_event";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            DeliveredAt delivered_at: Option<Timestamptz>,
            EventType event_type: String,
            Id id: Uuid,
            NextRetryAt next_retry_at: Option<Timestamptz>,
            SellerId seller_id: Uuid,
            Status status: String,
            WebhookId webhook_id: Uuid,
        }
        numeric {
            AttemptCount attempt_count: i32,
            ResponseStatus response_status: Option<i32>,
        }
        jsonb {
            Payload payload: Jsonb,
        }
        other {}
    }
    constraints {
        WebhookEventPkey = "webhook_event_pkey" (id),
    }
    object_relationships {
        seller: super::seller::Seller,
        webhook: super::webhook::Webhook,
    }
    array_relationships {}
}
