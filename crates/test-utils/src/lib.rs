//! Seovars test utilities.
//!
//! Fixture builders for classification tests: content records with a given
//! content type, and site settings with or without a designated static
//! front page.

use serde_json::Value as JsonValue;
use uuid::Uuid;

use seovars::models::Content;
use seovars::settings::{ShowOnFront, SiteSettings};

/// Create a content record of the given type with default values.
pub fn test_content(content_type: &str) -> TestContent {
    TestContent {
        id: Uuid::now_v7(),
        content_type: content_type.to_string(),
        title: format!("Test {content_type}"),
        status: 1,
        created: 0,
        changed: 0,
        fields: serde_json::json!({}),
    }
}

/// A content fixture builder.
#[derive(Debug, Clone)]
pub struct TestContent {
    pub id: Uuid,
    pub content_type: String,
    pub title: String,
    pub status: i16,
    pub created: i64,
    pub changed: i64,
    pub fields: JsonValue,
}

impl TestContent {
    /// Set a custom ID.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set as unpublished.
    pub fn unpublished(mut self) -> Self {
        self.status = 0;
        self
    }

    /// Add a single field.
    pub fn with_field(mut self, name: &str, value: JsonValue) -> Self {
        if let Some(obj) = self.fields.as_object_mut() {
            obj.insert(name.to_string(), value);
        }
        self
    }

    /// Finish the fixture as a content record.
    pub fn build(self) -> Content {
        Content {
            id: self.id,
            content_type: self.content_type,
            title: self.title,
            status: self.status,
            created: self.created,
            changed: self.changed,
            fields: self.fields,
        }
    }
}

/// Site settings with no static front page configured.
pub fn default_settings() -> SiteSettings {
    SiteSettings::new()
}

/// Site settings designating `front` as the static front page.
pub fn front_page_settings(front: &Content) -> SiteSettings {
    let mut settings = SiteSettings::new();
    settings.set_show_on_front(ShowOnFront::Page);
    settings.set_page_on_front(front.id);
    settings
}
