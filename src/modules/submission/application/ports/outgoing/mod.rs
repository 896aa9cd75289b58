pub mod contact_repository;
pub mod delivery_error;
pub mod notification_relay;
pub mod testimonial_repository;

pub use contact_repository::ContactRepository;
pub use delivery_error::DeliveryError;
pub use notification_relay::NotificationRelay;
pub use testimonial_repository::TestimonialRepository;
