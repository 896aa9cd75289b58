pub mod contact_submission;
pub mod form_controller;
pub mod testimonial_submission;

pub use contact_submission::ContactSubmissionService;
pub use form_controller::{
    FormController, SubmissionStatus, SubmitLabels, DEFAULT_ACKNOWLEDGEMENT_DELAY,
};
pub use testimonial_submission::TestimonialSubmissionService;
