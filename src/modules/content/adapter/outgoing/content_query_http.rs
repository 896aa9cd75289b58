// src/modules/content/adapter/outgoing/content_query_http.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::modules::content::application::domain::{
    BlogPost, Experience, Project, Service, Skill, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::shared::api::{unwrap_envelope, ApiEndpoint};
use crate::shared::fetch::JsonFetcher;

// ============================================================================
// Adapter Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentQueryHttp {
    fetcher: Arc<dyn JsonFetcher>,
}

impl ContentQueryHttp {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { fetcher }
    }

    async fn list<T>(&self, endpoint: ApiEndpoint) -> Result<Vec<T>, ContentQueryError>
    where
        T: DeserializeOwned,
    {
        let path = endpoint.path();
        let value = self.fetcher.get_json(&path).await?;

        let records = match unwrap_envelope(value) {
            Value::Array(records) => records,
            other => {
                return Err(ContentQueryError::Malformed(format!(
                    "{}: expected a list, got {}",
                    path,
                    json_kind(&other)
                )))
            }
        };

        // One bad record must not blank the whole section.
        Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(endpoint = %path, index, error = %e, "Skipping malformed record");
                    None
                }
            })
            .collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ContentQuery for ContentQueryHttp {
    async fn services(&self) -> Result<Vec<Service>, ContentQueryError> {
        self.list(ApiEndpoint::Services).await
    }

    async fn experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        self.list(ApiEndpoint::Experience).await
    }

    async fn skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        self.list(ApiEndpoint::Skills).await
    }

    async fn projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        self.list(ApiEndpoint::Projects).await
    }

    async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, ContentQueryError> {
        self.list(ApiEndpoint::FeaturedProjects { limit }).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError> {
        self.list(ApiEndpoint::Testimonials).await
    }

    async fn blogs(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        self.list(ApiEndpoint::Blogs).await
    }
}
