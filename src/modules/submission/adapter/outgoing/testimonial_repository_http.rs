// src/modules/submission/adapter/outgoing/testimonial_repository_http.rs

use std::sync::Arc;

use async_trait::async_trait;

use super::post_payload::post_payload;
use crate::modules::submission::application::domain::TestimonialPayload;
use crate::modules::submission::application::ports::outgoing::{
    DeliveryError, TestimonialRepository,
};
use crate::shared::api::ApiEndpoint;
use crate::shared::fetch::JsonFetcher;

#[derive(Clone)]
pub struct TestimonialRepositoryHttp {
    fetcher: Arc<dyn JsonFetcher>,
}

impl TestimonialRepositoryHttp {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryHttp {
    async fn submit_testimonial(&self, payload: TestimonialPayload) -> Result<(), DeliveryError> {
        post_payload(self.fetcher.as_ref(), &ApiEndpoint::Testimonials.path(), &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::shared::fetch::HttpJsonClient;

    #[tokio::test]
    async fn posts_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/testimonials"))
            .and(body_json(serde_json::json!({
                "name": "Grace",
                "rating": 5,
                "message": "Great work",
                "designation": "",
                "isApproved": false
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let repo = TestimonialRepositoryHttp::new(Arc::new(HttpJsonClient::new(server.uri())));

        repo.submit_testimonial(TestimonialPayload {
            name: "Grace".into(),
            rating: 5,
            message: "Great work".into(),
            designation: String::new(),
            is_approved: false,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn plain_string_rejection_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/testimonials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "error": "Validation failed"
            })))
            .mount(&server)
            .await;

        let repo = TestimonialRepositoryHttp::new(Arc::new(HttpJsonClient::new(server.uri())));

        let err = repo
            .submit_testimonial(TestimonialPayload {
                name: "Grace".into(),
                rating: 5,
                message: String::new(),
                designation: String::new(),
                is_approved: false,
            })
            .await
            .unwrap_err();

        assert_eq!(err, DeliveryError::Rejected("Validation failed".to_string()));
    }
}
