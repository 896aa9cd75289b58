// src/modules/seo/metadata.rs

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

/// Admin-entered keywords arrive either comma-separated or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Text(String),
}

impl Keywords {
    pub fn to_vec(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Keywords::List(items) => items.iter().map(String::as_str).collect(),
            Keywords::Text(text) => text.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Per-route record as stored by the CMS. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoRecord {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Keywords>,
    pub canonical_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub structured_data: Option<Value>,
}

/// Site-wide values used when neither the CMS nor the page supplies one.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoDefaults {
    pub site_name: String,
    pub site_url: String,
    pub author: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub og_type: String,
    pub twitter_card: String,
}

impl SeoDefaults {
    pub fn new(
        site_name: impl Into<String>,
        site_url: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let site_name = site_name.into();
        Self {
            meta_description: format!("{site_name}: projects, experience and writing"),
            meta_title: site_name.clone(),
            site_name,
            site_url: site_url.into().trim_end_matches('/').to_string(),
            author: author.into(),
            keywords: vec!["portfolio".to_string()],
            og_image: None,
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

/// Page-supplied values; they beat both the CMS record and the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl SeoOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSeo {
    pub route: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub site_name: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<String>,
    pub og_type: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: Option<String>,
    pub structured_data: Value,
}

//
// ──────────────────────────────────────────────────────────
// Route normalization
// ──────────────────────────────────────────────────────────
//

/// Canonical route key: one leading slash, no empty segments, no trailing
/// slash except for the root, query and fragment dropped.
pub fn normalize_route(route: &str) -> String {
    let path = route.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

//
// ──────────────────────────────────────────────────────────
// Merge
// ──────────────────────────────────────────────────────────
//

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Picks the first non-blank candidate, else `fallback`.
fn first_of<'a>(candidates: &[Option<&'a str>], fallback: &'a str) -> String {
    candidates
        .iter()
        .flatten()
        .next()
        .copied()
        .unwrap_or(fallback)
        .to_string()
}

/// Merges field by field: defaults, then the fetched record, then overrides
/// (title, description and image only).
pub fn resolve_seo(
    route: &str,
    defaults: &SeoDefaults,
    fetched: Option<&SeoRecord>,
    overrides: &SeoOverrides,
) -> ResolvedSeo {
    let route = normalize_route(route);
    let empty = SeoRecord::default();
    let record = fetched.unwrap_or(&empty);

    let title = first_of(
        &[present(&overrides.title), present(&record.meta_title)],
        &defaults.meta_title,
    );
    let description = first_of(
        &[present(&overrides.description), present(&record.meta_description)],
        &defaults.meta_description,
    );
    let image = present(&overrides.image)
        .or(present(&record.og_image))
        .or(defaults.og_image.as_deref())
        .map(str::to_string);

    let keywords = record
        .keywords
        .as_ref()
        .map(Keywords::to_vec)
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| defaults.keywords.clone());

    let canonical_url = present(&record.canonical_url)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}{}", defaults.site_url, route));

    let og_title = first_of(&[present(&overrides.title), present(&record.og_title)], &title);
    let og_description = first_of(
        &[present(&overrides.description), present(&record.og_description)],
        &description,
    );
    let twitter_title = first_of(
        &[present(&overrides.title), present(&record.twitter_title)],
        &og_title,
    );
    let twitter_description = first_of(
        &[present(&overrides.description), present(&record.twitter_description)],
        &og_description,
    );
    let twitter_image = present(&overrides.image)
        .or(present(&record.twitter_image))
        .map(str::to_string)
        .or_else(|| image.clone());

    let structured_data = structured_data(
        &title,
        &description,
        &canonical_url,
        &defaults.author,
        image.as_deref(),
        record.structured_data.as_ref(),
    );

    ResolvedSeo {
        meta_title: title,
        meta_description: description,
        keywords,
        canonical_url,
        site_name: defaults.site_name.clone(),
        og_title,
        og_description,
        og_image: image,
        og_type: first_of(&[present(&record.og_type)], &defaults.og_type),
        twitter_card: first_of(&[present(&record.twitter_card)], &defaults.twitter_card),
        twitter_title,
        twitter_description,
        twitter_image,
        structured_data,
        route,
    }
}

/// Baseline WebPage object, shallow-merged with the admin object. Admin keys
/// win on collision; a non-object admin value is ignored.
fn structured_data(
    name: &str,
    description: &str,
    url: &str,
    author: &str,
    image: Option<&str>,
    admin: Option<&Value>,
) -> Value {
    let mut merged = Map::new();
    merged.insert("@context".into(), json!("https://schema.org"));
    merged.insert("@type".into(), json!("WebPage"));
    merged.insert("name".into(), json!(name));
    merged.insert("description".into(), json!(description));
    merged.insert("url".into(), json!(url));
    merged.insert("author".into(), json!({ "@type": "Person", "name": author }));
    if let Some(image) = image {
        merged.insert("image".into(), json!(image));
    }

    match admin {
        Some(Value::Object(extra)) => {
            merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Some(Value::Null) | None => {}
        Some(other) => debug!(kind = %value_kind(other), "Ignoring non-object structured data"),
    }

    Value::Object(merged)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
