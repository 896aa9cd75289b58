//! Section scrolling and navbar state.

pub mod controller;
pub mod scroll_service;
pub mod scroll_surface;

pub use controller::NavigationController;
pub use scroll_service::{
    ScrollOutcome, ScrollService, DEFAULT_MAX_RETRIES, DEFAULT_OFFSET_PX, LOOKUP_INTERVAL, TOP,
};
pub use scroll_surface::{ScrollBehavior, ScrollSurface};
