pub mod forms;
pub mod payloads;

pub use forms::{ContactForm, FormFields, TestimonialForm, DEFAULT_RATING};
pub use payloads::{ContactPayload, NotificationPayload, TestimonialPayload};
