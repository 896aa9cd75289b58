pub mod content;
pub mod listing;
pub mod navigation;
pub mod resource;
pub mod seo;
pub mod submission;
