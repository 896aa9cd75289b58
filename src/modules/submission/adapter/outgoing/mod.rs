pub mod contact_repository_http;
pub mod notification_relay_http;
mod post_payload;
pub mod testimonial_repository_http;

pub use contact_repository_http::ContactRepositoryHttp;
pub use notification_relay_http::NotificationRelayHttp;
pub use testimonial_repository_http::TestimonialRepositoryHttp;
