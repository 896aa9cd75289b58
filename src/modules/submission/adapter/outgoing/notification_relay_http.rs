// src/modules/submission/adapter/outgoing/notification_relay_http.rs

use std::sync::Arc;

use async_trait::async_trait;

use super::post_payload::post_payload;
use crate::modules::submission::application::domain::NotificationPayload;
use crate::modules::submission::application::ports::outgoing::{DeliveryError, NotificationRelay};
use crate::shared::fetch::JsonFetcher;

/// Posts to an absolute relay URL, outside the CMS base URL.
#[derive(Clone)]
pub struct NotificationRelayHttp {
    fetcher: Arc<dyn JsonFetcher>,
    relay_url: String,
}

impl NotificationRelayHttp {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, relay_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            relay_url: relay_url.into(),
        }
    }
}

#[async_trait]
impl NotificationRelay for NotificationRelayHttp {
    async fn notify(&self, payload: NotificationPayload) -> Result<(), DeliveryError> {
        post_payload(self.fetcher.as_ref(), &self.relay_url, &payload).await
    }
}
