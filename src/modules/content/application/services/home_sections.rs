// src/modules/content/application/services/home_sections.rs

use serde::Deserialize;
use tracing::info;

use super::fallback_section::{FallbackSection, SectionOrder};
use crate::modules::content::application::domain::{
    Experience, Project, Service, Skill, Testimonial,
};
use crate::modules::content::application::ports::outgoing::ContentQuery;

const BUILTIN_SECTIONS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/default_sections.json"
));

/// Build-time fallback collections, one per home page section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionDefaults {
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

impl SectionDefaults {
    /// The collections bundled with the crate.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUILTIN_SECTIONS)
    }
}

// ============================================================================
// Home page
// ============================================================================

pub struct HomeSections {
    pub services: FallbackSection<Service>,
    pub experience: FallbackSection<Experience>,
    pub skills: FallbackSection<Skill>,
    pub works: FallbackSection<Project>,
    pub featured: FallbackSection<Project>,
    pub testimonials: FallbackSection<Testimonial>,
    featured_limit: u32,
}

impl HomeSections {
    pub fn new(defaults: SectionDefaults, featured_limit: u32) -> Self {
        let featured_defaults: Vec<Project> = defaults
            .projects
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect();

        Self {
            services: FallbackSection::new("services", defaults.services, SectionOrder::Priority),
            experience: FallbackSection::new(
                "experience",
                defaults.experience,
                SectionOrder::Priority,
            ),
            skills: FallbackSection::new("skills", defaults.skills, SectionOrder::Priority),
            works: FallbackSection::new("works", defaults.projects, SectionOrder::Priority),
            featured: FallbackSection::new("featured", featured_defaults, SectionOrder::AsReturned)
                .with_limit(featured_limit as usize),
            testimonials: FallbackSection::new(
                "testimonials",
                defaults.testimonials,
                SectionOrder::Newest,
            ),
            featured_limit,
        }
    }

    /// Loads every section concurrently. Returns how many switched to live data.
    pub async fn refresh<Q>(&mut self, query: &Q) -> usize
    where
        Q: ContentQuery + ?Sized,
    {
        let (services, experience, skills, works, featured, testimonials) = tokio::join!(
            query.services(),
            query.experience(),
            query.skills(),
            query.projects(),
            query.featured_projects(self.featured_limit),
            query.testimonials(),
        );

        let replaced = [
            self.services.apply(services),
            self.experience.apply(experience),
            self.skills.apply(skills),
            self.works.apply(works),
            self.featured.apply(featured),
            self.testimonials.apply(testimonials),
        ]
        .into_iter()
        .filter(|replaced| *replaced)
        .count();

        info!(replaced, "Home sections refreshed");
        replaced
    }
}
