// src/modules/submission/application/ports/outgoing/contact_repository.rs

use async_trait::async_trait;

use super::delivery_error::DeliveryError;
use crate::modules::submission::application::domain::ContactPayload;

/// Persists contact requests in the CMS.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn save_contact(&self, payload: ContactPayload) -> Result<(), DeliveryError>;
}
