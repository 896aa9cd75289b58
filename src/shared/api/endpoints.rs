// src/shared/api/endpoints.rs

/// Routes exposed by the CMS backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEndpoint {
    Services,
    Experience,
    Skills,
    Projects,
    FeaturedProjects { limit: u32 },
    Testimonials,
    Blogs,
    Settings,
    Contacts,
    /// Expects a route already passed through `seo::normalize_route`.
    Seo(String),
}

impl ApiEndpoint {
    pub fn path(&self) -> String {
        match self {
            ApiEndpoint::Services => "/api/services".to_string(),
            ApiEndpoint::Experience => "/api/experience".to_string(),
            ApiEndpoint::Skills => "/api/skills".to_string(),
            ApiEndpoint::Projects => "/api/projects".to_string(),
            ApiEndpoint::FeaturedProjects { limit } => {
                format!("/api/projects/featured?limit={limit}")
            }
            ApiEndpoint::Testimonials => "/api/testimonials".to_string(),
            ApiEndpoint::Blogs => "/api/blogs".to_string(),
            ApiEndpoint::Settings => "/api/settings".to_string(),
            ApiEndpoint::Contacts => "/api/contacts".to_string(),
            ApiEndpoint::Seo(route) => format!("/api/seo/{}", urlencoding::encode(route)),
        }
    }
}
