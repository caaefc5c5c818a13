//! Site settings relevant to classification.
//!
//! Front-page designation lives in site configuration as JSON values under
//! string keys. `show_on_front` selects between a rolling listing of recent
//! posts (the default) and a designated static page; `page_on_front` names
//! that page. The resolver only ever asks one question of this module: is a
//! given content record the site's static front page?

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::Error;
use crate::models::Content;

/// Setting key: what the site front page renders.
pub const SHOW_ON_FRONT: &str = "show_on_front";

/// Setting key: id of the designated front page.
pub const PAGE_ON_FRONT: &str = "page_on_front";

/// What the site front page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowOnFront {
    /// Rolling listing of recent posts (the default).
    #[default]
    Posts,
    /// A designated static page.
    Page,
}

impl ShowOnFront {
    /// The setting value string for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ShowOnFront::Posts => "posts",
            ShowOnFront::Page => "page",
        }
    }
}

impl FromStr for ShowOnFront {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "posts" => Ok(ShowOnFront::Posts),
            "page" => Ok(ShowOnFront::Page),
            other => Err(Error::InvalidShowOnFront(other.to_string())),
        }
    }
}

/// Typed view over site configuration values.
///
/// Hosts populate this from wherever they store site configuration; the
/// accessors apply the documented defaults for missing values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    values: HashMap<String, JsonValue>,
}

impl SiteSettings {
    /// Empty settings: front page shows the post listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a key/value map of configuration values.
    pub fn from_map(values: HashMap<String, JsonValue>) -> Self {
        Self { values }
    }

    /// Set a raw configuration value.
    pub fn set(&mut self, key: &str, value: JsonValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Get a raw configuration value.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    /// What the front page renders. Missing means the default; a malformed
    /// value is a typed error for the host to surface.
    pub fn show_on_front(&self) -> Result<ShowOnFront, Error> {
        match self.values.get(SHOW_ON_FRONT).and_then(JsonValue::as_str) {
            Some(s) => s.parse(),
            None => Ok(ShowOnFront::default()),
        }
    }

    /// The designated front page id, when one is set and well-formed.
    pub fn page_on_front(&self) -> Option<Uuid> {
        self.values
            .get(PAGE_ON_FRONT)
            .and_then(JsonValue::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
    }

    /// Set what the front page renders.
    pub fn set_show_on_front(&mut self, mode: ShowOnFront) {
        self.set(SHOW_ON_FRONT, JsonValue::String(mode.as_str().to_string()));
    }

    /// Designate a content record as the static front page.
    pub fn set_page_on_front(&mut self, id: Uuid) {
        self.set(PAGE_ON_FRONT, JsonValue::String(id.to_string()));
    }

    /// Remove the front-page designation.
    pub fn clear_page_on_front(&mut self) {
        self.values.remove(PAGE_ON_FRONT);
    }

    /// Whether `content` is designated as the site's static front page.
    ///
    /// A malformed `show_on_front` value means no static front page here;
    /// the typed accessor is where hosts surface the configuration error.
    pub fn is_front_page(&self, content: &Content) -> bool {
        if self.show_on_front().unwrap_or_default() != ShowOnFront::Page {
            return false;
        }
        self.page_on_front().is_some_and(|id| id == content.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content_with_id(id: Uuid) -> Content {
        Content {
            id,
            content_type: "page".to_string(),
            title: "Front".to_string(),
            status: 1,
            created: 0,
            changed: 0,
            fields: json!({}),
        }
    }

    #[test]
    fn show_on_front_defaults_to_posts() {
        let settings = SiteSettings::new();
        assert_eq!(settings.show_on_front().unwrap(), ShowOnFront::Posts);
    }

    #[test]
    fn show_on_front_parses_page() {
        let mut settings = SiteSettings::new();
        settings.set(SHOW_ON_FRONT, json!("page"));
        assert_eq!(settings.show_on_front().unwrap(), ShowOnFront::Page);
    }

    #[test]
    fn show_on_front_rejects_unknown_values() {
        let mut settings = SiteSettings::new();
        settings.set(SHOW_ON_FRONT, json!("carousel"));
        assert_eq!(
            settings.show_on_front(),
            Err(Error::InvalidShowOnFront("carousel".to_string()))
        );
    }

    #[test]
    fn page_on_front_ignores_malformed_ids() {
        let mut settings = SiteSettings::new();
        settings.set(PAGE_ON_FRONT, json!("not-a-uuid"));
        assert_eq!(settings.page_on_front(), None);
    }

    #[test]
    fn is_front_page_requires_both_settings() {
        let id = Uuid::now_v7();
        let content = content_with_id(id);

        let mut settings = SiteSettings::new();
        assert!(!settings.is_front_page(&content));

        settings.set_page_on_front(id);
        assert!(!settings.is_front_page(&content));

        settings.set_show_on_front(ShowOnFront::Page);
        assert!(settings.is_front_page(&content));
    }

    #[test]
    fn is_front_page_matches_by_id() {
        let front = content_with_id(Uuid::now_v7());
        let other = content_with_id(Uuid::now_v7());

        let mut settings = SiteSettings::new();
        settings.set_show_on_front(ShowOnFront::Page);
        settings.set_page_on_front(front.id);

        assert!(settings.is_front_page(&front));
        assert!(!settings.is_front_page(&other));
    }

    #[test]
    fn is_front_page_treats_malformed_mode_as_posts() {
        let content = content_with_id(Uuid::now_v7());

        let mut settings = SiteSettings::new();
        settings.set(SHOW_ON_FRONT, json!("carousel"));
        settings.set_page_on_front(content.id);

        assert!(!settings.is_front_page(&content));
    }
}
