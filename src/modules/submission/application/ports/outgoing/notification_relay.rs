// src/modules/submission/application/ports/outgoing/notification_relay.rs

use async_trait::async_trait;

use super::delivery_error::DeliveryError;
use crate::modules::submission::application::domain::NotificationPayload;

/// Third-party email relay that forwards a contact request to the site owner.
#[async_trait]
pub trait NotificationRelay: Send + Sync {
    async fn notify(&self, payload: NotificationPayload) -> Result<(), DeliveryError>;
}
