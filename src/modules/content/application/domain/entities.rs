// src/modules/content/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status value the CMS uses for publicly visible records.
pub const ACTIVE_STATUS: &str = "Active";

/// Read-only record published through the CMS.
pub trait ContentItem {
    /// Gate for public rendering. Always checked before sorting or slicing.
    fn is_visible(&self) -> bool;

    /// Lower comes first.
    fn priority_order(&self) -> Option<i64> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

fn is_active(status: &Option<String>) -> bool {
    status.as_deref() == Some(ACTIVE_STATUS)
}

/// Explicit `null` reads as the field default, same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//
// ──────────────────────────────────────────────────────────
// Marketing sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub status: Option<String>,
    pub priority_order: Option<i64>,
}

impl ContentItem for Service {
    fn is_visible(&self) -> bool {
        is_active(&self.status)
    }

    fn priority_order(&self) -> Option<i64> {
        self.priority_order
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    pub icon: Option<String>,
    pub icon_bg: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub points: Vec<String>,
    pub status: Option<String>,
    pub priority_order: Option<i64>,
}

impl ContentItem for Experience {
    fn is_visible(&self) -> bool {
        is_active(&self.status)
    }

    fn priority_order(&self) -> Option<i64> {
        self.priority_order
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority_order: Option<i64>,
}

impl ContentItem for Skill {
    fn is_visible(&self) -> bool {
        is_active(&self.status)
    }

    fn priority_order(&self) -> Option<i64> {
        self.priority_order
    }
}

/// Tags arrive either as plain strings or as `{ name, color }` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectTag {
    Styled {
        name: String,
        #[serde(default)]
        color: Option<String>,
    },
    Plain(String),
}

impl ProjectTag {
    pub fn name(&self) -> &str {
        match self {
            ProjectTag::Styled { name, .. } => name,
            ProjectTag::Plain(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<ProjectTag>,
    pub image: Option<String>,
    pub source_code_link: Option<String>,
    pub live_demo_link: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    pub status: Option<String>,
    pub priority_order: Option<i64>,
    #[serde(rename = "created_at", alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentItem for Project {
    fn is_visible(&self) -> bool {
        is_active(&self.status)
    }

    fn priority_order(&self) -> Option<i64> {
        self.priority_order
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog & testimonials
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(rename = "created_at", alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentItem for BlogPost {
    fn is_visible(&self) -> bool {
        self.published
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub designation: Option<String>,
    pub company: Option<String>,
    #[serde(alias = "testimonial", deserialize_with = "null_as_default")]
    pub message: String,
    pub rating: Option<u8>,
    pub image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_approved: bool,
    #[serde(rename = "created_at", alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentItem for Testimonial {
    fn is_visible(&self) -> bool {
        self.is_approved
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
