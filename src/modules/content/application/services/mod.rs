pub mod fallback_section;
pub mod home_sections;
pub mod settings_service;

pub use fallback_section::{FallbackSection, SectionOrder};
pub use home_sections::{HomeSections, SectionDefaults};
pub use settings_service::SettingsService;
