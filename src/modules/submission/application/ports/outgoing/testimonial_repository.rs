// src/modules/submission/application/ports/outgoing/testimonial_repository.rs

use async_trait::async_trait;

use super::delivery_error::DeliveryError;
use crate::modules::submission::application::domain::TestimonialPayload;

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn submit_testimonial(&self, payload: TestimonialPayload) -> Result<(), DeliveryError>;
}
