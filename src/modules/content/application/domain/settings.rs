// src/modules/content/application/domain/settings.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entities::null_as_default;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Site-wide singleton. Only ever replaced by a refresh, never edited locally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsSnapshot {
    #[serde(alias = "availableForWork", deserialize_with = "null_as_default")]
    pub is_available: bool,
    /// Platform name → profile URL.
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: ContactInfo,
    pub resume_url: Option<String>,
}

impl SettingsSnapshot {
    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social_links
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(platform))
            .map(|(_, url)| url.as_str())
            .filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_partial_settings() {
        let settings: SettingsSnapshot = serde_json::from_value(json!({
            "availableForWork": true,
            "socialLinks": { "GitHub": "https://github.com/example", "twitter": "" },
            "contact": { "email": "hello@example.com" }
        }))
        .unwrap();

        assert!(settings.is_available);
        assert_eq!(settings.contact.email.as_deref(), Some("hello@example.com"));
        assert_eq!(settings.social_link("github"), Some("https://github.com/example"));
        assert_eq!(settings.social_link("twitter"), None);
        assert_eq!(settings.resume_url, None);
    }

    #[test]
    fn null_sections_read_as_empty() {
        let settings: SettingsSnapshot = serde_json::from_value(json!({
            "isAvailable": null,
            "socialLinks": null,
            "contact": null
        }))
        .unwrap();

        assert_eq!(settings, SettingsSnapshot::default());
    }
}
