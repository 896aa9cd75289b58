// src/modules/submission/application/domain/forms.rs

use serde::Serialize;

/// Star rating a fresh testimonial form starts with.
pub const DEFAULT_RATING: u8 = 5;

/// A form the input layer edits by field name. `Default` is the initial,
/// post-reset shape.
pub trait FormFields: Clone + Default + Send + Sync + 'static {
    /// Returns `false` when the field is unknown or the value cannot be held.
    fn set_field(&mut self, name: &str, value: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub service: String,
    pub budget: String,
    pub message: String,
}

impl FormFields for ContactForm {
    fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "mobile" => &mut self.mobile,
            "service" => &mut self.service,
            "budget" => &mut self.budget,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialForm {
    pub name: String,
    pub designation: String,
    pub message: String,
    pub rating: u8,
}

impl Default for TestimonialForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            designation: String::new(),
            message: String::new(),
            rating: DEFAULT_RATING,
        }
    }
}

impl FormFields for TestimonialForm {
    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "name" => self.name = value.to_string(),
            "designation" => self.designation = value.to_string(),
            "message" | "testimonial" => self.message = value.to_string(),
            "rating" => match value.trim().parse::<u8>() {
                Ok(stars) if (1..=5).contains(&stars) => self.rating = stars,
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}
