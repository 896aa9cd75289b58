// src/modules/submission/application/domain/payloads.rs

use serde::Serialize;

use super::forms::{ContactForm, TestimonialForm};

/// Body persisted to the backend's contact collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub subject: String,
    pub budget: String,
    pub message: String,
}

impl From<&ContactForm> for ContactPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            mobile: form.mobile.clone(),
            subject: form.service.clone(),
            budget: form.budget.clone(),
            message: form.message.clone(),
        }
    }
}

/// Body posted to the email relay. Underscore keys are relay directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub service: String,
    pub budget: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_template")]
    pub template: String,
}

impl NotificationPayload {
    pub fn from_form(form: &ContactForm, template: &str) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            mobile: form.mobile.clone(),
            service: form.service.clone(),
            budget: form.budget.clone(),
            message: form.message.clone(),
            subject: format!("New contact from {}", form.name),
            template: template.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    pub name: String,
    pub rating: u8,
    pub message: String,
    pub designation: String,
    /// Submissions always enter moderation.
    pub is_approved: bool,
}

impl From<&TestimonialForm> for TestimonialPayload {
    fn from(form: &TestimonialForm) -> Self {
        Self {
            name: form.name.clone(),
            rating: form.rating,
            message: form.message.clone(),
            designation: form.designation.clone(),
            is_approved: false,
        }
    }
}
