// src/modules/submission/application/services/testimonial_submission.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::submission::application::domain::{TestimonialForm, TestimonialPayload};
use crate::modules::submission::application::ports::incoming::{
    SubmissionError, SubmissionReceipt, SubmitForm,
};
use crate::modules::submission::application::ports::outgoing::TestimonialRepository;

#[derive(Clone)]
pub struct TestimonialSubmissionService {
    testimonials: Arc<dyn TestimonialRepository>,
}

impl TestimonialSubmissionService {
    pub fn new(testimonials: Arc<dyn TestimonialRepository>) -> Self {
        Self { testimonials }
    }
}

#[async_trait]
impl SubmitForm<TestimonialForm> for TestimonialSubmissionService {
    async fn submit(&self, form: &TestimonialForm) -> Result<SubmissionReceipt, SubmissionError> {
        self.testimonials
            .submit_testimonial(TestimonialPayload::from(form))
            .await
            .map_err(|e| {
                error!(error = %e, "Testimonial submission failed");
                SubmissionError::PersistenceFailed(e)
            })?;

        info!(rating = form.rating, "Testimonial submitted for moderation");
        Ok(SubmissionReceipt {
            persisted: true,
            notified: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};

    use crate::modules::submission::application::ports::outgoing::DeliveryError;

    mock! {
        pub Testimonials {}

        #[async_trait]
        impl TestimonialRepository for Testimonials {
            async fn submit_testimonial(&self, payload: TestimonialPayload) -> Result<(), DeliveryError>;
        }
    }

    fn form() -> TestimonialForm {
        TestimonialForm {
            name: "Grace".into(),
            designation: "CTO".into(),
            message: "Great work".into(),
            rating: 4,
        }
    }

    #[tokio::test]
    async fn posts_unapproved_testimonial() {
        let mut repo = MockTestimonials::new();
        repo.expect_submit_testimonial()
            .with(eq(TestimonialPayload {
                name: "Grace".into(),
                rating: 4,
                message: "Great work".into(),
                designation: "CTO".into(),
                is_approved: false,
            }))
            .times(1)
            .returning(|_| Ok(()));

        let receipt = TestimonialSubmissionService::new(Arc::new(repo))
            .submit(&form())
            .await
            .unwrap();

        assert!(receipt.persisted);
    }

    #[tokio::test]
    async fn failure_is_surfaced() {
        let mut repo = MockTestimonials::new();
        repo.expect_submit_testimonial()
            .returning(|_| Err(DeliveryError::Unavailable("HTTP error! status: 500".into())));

        let err = TestimonialSubmissionService::new(Arc::new(repo))
            .submit(&form())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::PersistenceFailed(_)));
    }
}
