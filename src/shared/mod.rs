pub mod api;
pub mod fetch;
pub mod wait;
