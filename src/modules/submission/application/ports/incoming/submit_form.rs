// src/modules/submission/application/ports/incoming/submit_form.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::submission::application::domain::FormFields;
use crate::modules::submission::application::ports::outgoing::DeliveryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("notification failed: {0}")]
    NotificationFailed(DeliveryError),

    #[error("submission failed: {0}")]
    PersistenceFailed(DeliveryError),

    #[error("submission aborted: {0}")]
    Aborted(String),
}

/// What actually reached each destination of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub persisted: bool,
    pub notified: bool,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitForm<F>: Send + Sync
where
    F: FormFields,
{
    async fn submit(&self, form: &F) -> Result<SubmissionReceipt, SubmissionError>;
}
