// src/modules/seo/head.rs

use super::metadata::ResolvedSeo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=...>`
    Named { name: &'static str, content: String },
    /// `<meta property=...>` (Open Graph)
    Property { property: &'static str, content: String },
    Link { rel: &'static str, href: String },
    JsonLd(String),
}

impl HeadTag {
    pub fn to_html(&self) -> String {
        match self {
            HeadTag::Title(text) => format!("<title>{}</title>", escape_html(text)),
            HeadTag::Named { name, content } => {
                format!(r#"<meta name="{}" content="{}">"#, name, escape_html(content))
            }
            HeadTag::Property { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                property,
                escape_html(content)
            ),
            HeadTag::Link { rel, href } => {
                format!(r#"<link rel="{}" href="{}">"#, rel, escape_html(href))
            }
            HeadTag::JsonLd(json) => {
                format!(r#"<script type="application/ld+json">{}</script>"#, json)
            }
        }
    }
}

impl ResolvedSeo {
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let named = |name, content: &str| HeadTag::Named {
            name,
            content: content.to_string(),
        };
        let property = |property, content: &str| HeadTag::Property {
            property,
            content: content.to_string(),
        };

        let mut tags = vec![
            HeadTag::Title(self.meta_title.clone()),
            named("description", &self.meta_description),
        ];
        if !self.keywords.is_empty() {
            tags.push(named("keywords", &self.keywords.join(", ")));
        }
        tags.push(HeadTag::Link {
            rel: "canonical",
            href: self.canonical_url.clone(),
        });

        tags.extend([
            property("og:title", &self.og_title),
            property("og:description", &self.og_description),
            property("og:type", &self.og_type),
            property("og:url", &self.canonical_url),
            property("og:site_name", &self.site_name),
        ]);
        if let Some(image) = &self.og_image {
            tags.push(property("og:image", image));
        }

        tags.extend([
            named("twitter:card", &self.twitter_card),
            named("twitter:title", &self.twitter_title),
            named("twitter:description", &self.twitter_description),
        ]);
        if let Some(image) = &self.twitter_image {
            tags.push(named("twitter:image", image));
        }

        tags.push(HeadTag::JsonLd(script_safe_json(&self.structured_data)));
        tags
    }

    pub fn render_html(&self) -> String {
        self.head_tags()
            .iter()
            .map(HeadTag::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON text that cannot close its surrounding `<script>` element.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}
