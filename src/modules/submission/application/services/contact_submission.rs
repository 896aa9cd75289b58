// src/modules/submission/application/services/contact_submission.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::submission::application::domain::{
    ContactForm, ContactPayload, NotificationPayload,
};
use crate::modules::submission::application::ports::incoming::{
    SubmissionError, SubmissionReceipt, SubmitForm,
};
use crate::modules::submission::application::ports::outgoing::{
    ContactRepository, NotificationRelay,
};

// ============================================================================
// Contact Submission (Orchestration Layer)
// ============================================================================

/// Delivers a contact request to two destinations. The writes are not atomic:
/// a request can be persisted without a notification, or the reverse.
#[derive(Clone)]
pub struct ContactSubmissionService {
    contacts: Arc<dyn ContactRepository>,
    relay: Arc<dyn NotificationRelay>,
    template: String,
}

impl ContactSubmissionService {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        relay: Arc<dyn NotificationRelay>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            contacts,
            relay,
            template: template.into(),
        }
    }
}

#[async_trait]
impl SubmitForm<ContactForm> for ContactSubmissionService {
    /// 1. Persists the request (failure is logged, not fatal)
    /// 2. Relays the notification (failure fails the submission)
    async fn submit(&self, form: &ContactForm) -> Result<SubmissionReceipt, SubmissionError> {
        let persisted = match self.contacts.save_contact(ContactPayload::from(form)).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to persist contact request; continuing with notification");
                false
            }
        };

        let notification = NotificationPayload::from_form(form, &self.template);
        if let Err(e) = self.relay.notify(notification).await {
            error!(error = %e, persisted, "Contact notification failed");
            return Err(SubmissionError::NotificationFailed(e));
        }

        info!(persisted, "Contact request delivered");
        Ok(SubmissionReceipt {
            persisted,
            notified: true,
        })
    }
}
