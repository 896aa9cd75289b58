// src/modules/submission/application/services/form_controller.rs

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error};

use crate::modules::submission::application::domain::FormFields;
use crate::modules::submission::application::ports::incoming::{
    SubmissionError, SubmissionReceipt, SubmitForm,
};

/// How long the success acknowledgement stays up unless dismissed.
pub const DEFAULT_ACKNOWLEDGEMENT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: String,
    pub busy: String,
}

impl Default for SubmitLabels {
    fn default() -> Self {
        Self {
            idle: "Send".to_string(),
            busy: "Sending...".to_string(),
        }
    }
}

struct FormState<F> {
    form: F,
    /// Bumped on every accepted edit.
    revision: u64,
    status: SubmissionStatus,
    acknowledged_until: Option<Instant>,
    last_receipt: Option<SubmissionReceipt>,
}

// ============================================================================
// Form controller
// ============================================================================

/// Shared handle over one form. Clones observe and drive the same state, so
/// the input layer and the submit button can hold separate handles.
pub struct FormController<F: FormFields> {
    state: Arc<Mutex<FormState<F>>>,
    submitter: Arc<dyn SubmitForm<F>>,
    labels: SubmitLabels,
    acknowledgement_delay: Duration,
}

impl<F: FormFields> Clone for FormController<F> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            submitter: Arc::clone(&self.submitter),
            labels: self.labels.clone(),
            acknowledgement_delay: self.acknowledgement_delay,
        }
    }
}

impl<F: FormFields + fmt::Debug> fmt::Debug for FormController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("FormController")
            .field("form", &state.form)
            .field("status", &state.status)
            .finish()
    }
}

impl<F: FormFields> FormController<F> {
    pub fn new(submitter: Arc<dyn SubmitForm<F>>, acknowledgement_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                form: F::default(),
                revision: 0,
                status: SubmissionStatus::Idle,
                acknowledged_until: None,
                last_receipt: None,
            })),
            submitter,
            labels: SubmitLabels::default(),
            acknowledgement_delay,
        }
    }

    pub fn with_labels(mut self, labels: SubmitLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn form(&self) -> F {
        self.lock().form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status.clone()
    }

    pub fn last_receipt(&self) -> Option<SubmissionReceipt> {
        self.lock().last_receipt
    }

    /// Applies an edit. A settled outcome returns to `Idle`. Edits made while
    /// submitting survive the post-success reset.
    pub fn set_field(&self, name: &str, value: &str) -> bool {
        let mut state = self.lock();
        let accepted = state.form.set_field(name, value);
        if accepted {
            Self::touch(&mut state);
        }
        accepted
    }

    pub fn update(&self, edit: impl FnOnce(&mut F)) {
        let mut state = self.lock();
        edit(&mut state.form);
        Self::touch(&mut state);
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.lock().status != SubmissionStatus::Submitting
    }

    pub fn submit_label(&self) -> &str {
        if self.is_submit_enabled() {
            &self.labels.idle
        } else {
            &self.labels.busy
        }
    }

    pub fn failure_message(&self) -> Option<String> {
        match &self.lock().status {
            SubmissionStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn acknowledgement_visible(&self) -> bool {
        let state = self.lock();
        state.status == SubmissionStatus::Succeeded
            && state
                .acknowledged_until
                .is_some_and(|until| Instant::now() < until)
    }

    pub fn dismiss_acknowledgement(&self) {
        self.lock().acknowledged_until = None;
    }

    /// Submits the current fields. The delivery runs on its own task, so it
    /// finishes and settles the state even if the caller stops awaiting.
    pub async fn submit(&self) -> Result<SubmissionReceipt, SubmissionError> {
        let (snapshot, revision) = {
            let mut state = self.lock();
            if state.status == SubmissionStatus::Submitting {
                debug!("Submit ignored; a submission is already in progress");
                return Err(SubmissionError::AlreadySubmitting);
            }
            state.status = SubmissionStatus::Submitting;
            state.acknowledged_until = None;
            (state.form.clone(), state.revision)
        };

        let submitter = Arc::clone(&self.submitter);
        let this = self.clone();
        let handle = tokio::spawn(async move {
            let result = submitter.submit(&snapshot).await;
            this.settle(revision, &result);
            result
        });

        match handle.await {
            Ok(result) => result,
            Err(join_error) => {
                error!(error = %join_error, "Submission task aborted");
                let err = SubmissionError::Aborted(join_error.to_string());
                self.lock().status = SubmissionStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    fn settle(&self, submitted: u64, result: &Result<SubmissionReceipt, SubmissionError>) {
        let mut state = self.lock();
        match result {
            Ok(receipt) => {
                if state.revision == submitted {
                    state.form = F::default();
                } else {
                    debug!("Form edited during submission; keeping the new input");
                }
                state.status = SubmissionStatus::Succeeded;
                state.acknowledged_until = Some(Instant::now() + self.acknowledgement_delay);
                state.last_receipt = Some(*receipt);
            }
            Err(e) => {
                state.status = SubmissionStatus::Failed(e.to_string());
            }
        }
    }

    fn touch(state: &mut FormState<F>) {
        state.revision += 1;
        if state.status != SubmissionStatus::Submitting {
            state.status = SubmissionStatus::Idle;
            state.acknowledged_until = None;
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState<F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
