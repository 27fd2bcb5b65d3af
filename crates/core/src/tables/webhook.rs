//! `webhook`

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// An outbound notification endpoint registered by a seller.
    pub struct Webhook = "webhook";
    primary_key { id: Uuid }
    columns {
        ordered {
            CreatedAt created_at: Timestamptz,
            Description description: Option<String>,
            Id id: Uuid,
            SecretHash secret_hash: String,
            SellerId seller_id: Uuid,
            Url url: String,
        }
        numeric {}
        jsonb {
            EventTypes event_types: Option<Jsonb>,
        }
        other {
            IsActive is_active: bool,
        }
    }
    constraints {
        WebhookPkey = "webhook_pkey" (id),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {
        webhook_events / webhook_events_aggregate: super::webhook_event::WebhookEvent,
    }
}
