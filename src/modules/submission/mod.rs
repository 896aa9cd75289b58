//! Contact and testimonial submission: form state, delivery ports and their
//! HTTP adapters.

pub mod adapter;
pub mod application;
