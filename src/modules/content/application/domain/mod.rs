pub mod entities;
pub mod settings;

pub use entities::{
    BlogPost, ContentItem, Experience, Project, ProjectTag, Service, Skill, Testimonial,
    ACTIVE_STATUS,
};
pub use settings::{ContactInfo, SettingsSnapshot};
