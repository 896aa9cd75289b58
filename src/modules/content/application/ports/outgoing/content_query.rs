// src/modules/content/application/ports/outgoing/content_query.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::{
    BlogPost, Experience, Project, Service, Skill, Testimonial,
};
use crate::shared::fetch::FetchError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Content not found")]
    NotFound,

    #[error("Content unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed content: {0}")]
    Malformed(String),
}

impl From<FetchError> for ContentQueryError {
    fn from(err: FetchError) -> Self {
        match err {
            e if e.is_not_found() => ContentQueryError::NotFound,
            FetchError::Decode(msg) => ContentQueryError::Malformed(msg),
            other => ContentQueryError::Unavailable(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only, public CMS endpoints)
// ──────────────────────────────────────────────────────────
//

/// Collections come back exactly as published; visibility filtering and
/// ordering belong to the caller.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn services(&self) -> Result<Vec<Service>, ContentQueryError>;

    async fn experience(&self) -> Result<Vec<Experience>, ContentQueryError>;

    async fn skills(&self) -> Result<Vec<Skill>, ContentQueryError>;

    async fn projects(&self) -> Result<Vec<Project>, ContentQueryError>;

    /// Server-side selection, already ordered and limited.
    async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, ContentQueryError>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError>;

    async fn blogs(&self) -> Result<Vec<BlogPost>, ContentQueryError>;
}
