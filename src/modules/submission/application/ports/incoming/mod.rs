pub mod submit_form;

pub use submit_form::{SubmissionError, SubmissionReceipt, SubmitForm};
