// src/modules/submission/adapter/outgoing/contact_repository_http.rs

use std::sync::Arc;

use async_trait::async_trait;

use super::post_payload::post_payload;
use crate::modules::submission::application::domain::ContactPayload;
use crate::modules::submission::application::ports::outgoing::{ContactRepository, DeliveryError};
use crate::shared::api::ApiEndpoint;
use crate::shared::fetch::JsonFetcher;

#[derive(Clone)]
pub struct ContactRepositoryHttp {
    fetcher: Arc<dyn JsonFetcher>,
}

impl ContactRepositoryHttp {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryHttp {
    async fn save_contact(&self, payload: ContactPayload) -> Result<(), DeliveryError> {
        post_payload(self.fetcher.as_ref(), &ApiEndpoint::Contacts.path(), &payload).await
    }
}
