// src/client.rs

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::modules::content::adapter::outgoing::ContentQueryHttp;
use crate::modules::content::application::domain::{
    BlogPost, Project, SettingsSnapshot, Testimonial,
};
use crate::modules::content::application::ports::outgoing::ContentQuery;
use crate::modules::content::application::services::{
    HomeSections, SectionDefaults, SettingsService,
};
use crate::modules::listing::ListingController;
use crate::modules::resource::{Resource, ResourceCache, ResourceOptions};
use crate::modules::seo::{SeoDefaults, SeoService};
use crate::modules::submission::adapter::outgoing::{
    ContactRepositoryHttp, NotificationRelayHttp, TestimonialRepositoryHttp,
};
use crate::modules::submission::application::domain::{ContactForm, TestimonialForm};
use crate::modules::submission::application::ports::incoming::SubmitForm;
use crate::modules::submission::application::services::{
    ContactSubmissionService, FormController, TestimonialSubmissionService,
};
use crate::shared::fetch::{HttpJsonClient, JsonFetcher};

/// Wires every port to its HTTP adapter around one shared cache.
#[derive(Clone)]
pub struct PortfolioClient {
    config: Arc<ClientConfig>,
    cache: ResourceCache,
    content: Arc<dyn ContentQuery>,
    settings: SettingsService,
    seo: SeoService,
    contact_submitter: Arc<dyn SubmitForm<ContactForm>>,
    testimonial_submitter: Arc<dyn SubmitForm<TestimonialForm>>,
}

impl PortfolioClient {
    pub fn new(config: ClientConfig) -> Self {
        let fetcher = Arc::new(HttpJsonClient::new(config.api_base_url.clone()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn JsonFetcher>) -> Self {
        let cache = ResourceCache::new();

        let settings = SettingsService::new(
            cache.clone(),
            Arc::clone(&fetcher),
            ResourceOptions::slow_changing(config.settings_refresh),
        );

        let seo = SeoService::new(
            cache.clone(),
            Arc::clone(&fetcher),
            ResourceOptions::slow_changing(config.seo_refresh),
            SeoDefaults::new(&config.site_name, &config.site_url, &config.site_author),
        );

        let contact_submitter = Arc::new(ContactSubmissionService::new(
            Arc::new(ContactRepositoryHttp::new(Arc::clone(&fetcher))),
            Arc::new(NotificationRelayHttp::new(
                Arc::clone(&fetcher),
                config.notification_relay_url.clone(),
            )),
            config.notification_template.clone(),
        ));

        let testimonial_submitter = Arc::new(TestimonialSubmissionService::new(Arc::new(
            TestimonialRepositoryHttp::new(Arc::clone(&fetcher)),
        )));

        Self {
            content: Arc::new(ContentQueryHttp::new(fetcher)),
            config: Arc::new(config),
            cache,
            settings,
            seo,
            contact_submitter,
            testimonial_submitter,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    pub fn content(&self) -> Arc<dyn ContentQuery> {
        Arc::clone(&self.content)
    }

    pub fn settings(&self) -> Resource<SettingsSnapshot> {
        self.settings.subscribe()
    }

    pub fn seo(&self) -> &SeoService {
        &self.seo
    }

    /// Home page sections seeded with the bundled defaults.
    pub fn home_sections(&self) -> Result<HomeSections, serde_json::Error> {
        Ok(HomeSections::new(
            SectionDefaults::builtin()?,
            self.config.featured_projects_limit,
        ))
    }

    pub async fn refresh_home(&self, sections: &mut HomeSections) -> usize {
        sections.refresh(self.content.as_ref()).await
    }

    pub async fn blog_listing(&self) -> ListingController<BlogPost> {
        let mut listing = ListingController::new();
        listing.load(self.content.blogs()).await;
        listing
    }

    pub async fn project_listing(&self) -> ListingController<Project> {
        let mut listing = ListingController::new();
        listing.load(self.content.projects()).await;
        listing
    }

    pub async fn testimonial_listing(&self) -> ListingController<Testimonial> {
        let mut listing = ListingController::new();
        listing.load(self.content.testimonials()).await;
        listing
    }

    pub fn contact_form(&self) -> FormController<ContactForm> {
        FormController::new(
            Arc::clone(&self.contact_submitter),
            self.config.acknowledgement_delay,
        )
    }

    pub fn testimonial_form(&self) -> FormController<TestimonialForm> {
        FormController::new(
            Arc::clone(&self.testimonial_submitter),
            self.config.acknowledgement_delay,
        )
    }

    /// Window-focus hook for keys that opted into focus revalidation.
    pub async fn window_focused(&self) {
        self.cache.revalidate_on_focus().await;
    }
}
