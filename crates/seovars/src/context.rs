//! Context classification.
//!
//! Resolves the context label used to key recommended replacement variables:
//! by taxonomy name for term pages, by content record for item pages, by
//! content type or archive kind for settings screens. Unmatched inputs fall
//! back to the custom-term and custom-content-type labels rather than
//! failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::gate::CommerceGate;
use crate::models::Content;
use crate::settings::SiteSettings;

/// Context label for a piece of content.
///
/// Serializes to the exact label strings the admin UI keys its
/// recommendation lists on. `term-in-custom-taxomomy` keeps its historic
/// spelling; the string is part of the output contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PageContext {
    /// The built-in category taxonomy.
    #[serde(rename = "category")]
    Category,

    /// The built-in tag taxonomy.
    #[serde(rename = "tag")]
    Tag,

    /// The built-in post-format taxonomy.
    #[serde(rename = "post_format")]
    PostFormat,

    /// The commerce product-category taxonomy.
    #[serde(rename = "product_cat")]
    ProductCategory,

    /// The commerce product-tag taxonomy.
    #[serde(rename = "product_tag")]
    ProductTag,

    /// A term in any other taxonomy.
    #[serde(rename = "term-in-custom-taxomomy")]
    CustomTerm,

    /// An ordinary post.
    #[serde(rename = "post")]
    Post,

    /// A static page.
    #[serde(rename = "page")]
    Page,

    /// The designated static front page.
    #[serde(rename = "homepage")]
    Homepage,

    /// A commerce product.
    #[serde(rename = "product")]
    Product,

    /// Content of any other type.
    #[serde(rename = "custom_post_type")]
    CustomContentType,

    /// An author's listing of content.
    #[serde(rename = "author_archive")]
    AuthorArchive,

    /// A date-based listing of content.
    #[serde(rename = "date_archive")]
    DateArchive,

    /// A listing of a custom content type.
    #[serde(rename = "custom-post-type_archive")]
    CustomContentTypeArchive,

    /// The search results page.
    #[serde(rename = "search")]
    Search,

    /// The not-found page.
    #[serde(rename = "404")]
    NotFound,

    /// The sitemap index.
    #[serde(rename = "sitemap_index")]
    SitemapIndex,
}

impl PageContext {
    /// The label string for this context.
    pub fn as_str(self) -> &'static str {
        match self {
            PageContext::Category => "category",
            PageContext::Tag => "tag",
            PageContext::PostFormat => "post_format",
            PageContext::ProductCategory => "product_cat",
            PageContext::ProductTag => "product_tag",
            PageContext::CustomTerm => "term-in-custom-taxomomy",
            PageContext::Post => "post",
            PageContext::Page => "page",
            PageContext::Homepage => "homepage",
            PageContext::Product => "product",
            PageContext::CustomContentType => "custom_post_type",
            PageContext::AuthorArchive => "author_archive",
            PageContext::DateArchive => "date_archive",
            PageContext::CustomContentTypeArchive => "custom-post-type_archive",
            PageContext::Search => "search",
            PageContext::NotFound => "404",
            PageContext::SitemapIndex => "sitemap_index",
        }
    }

    /// All contexts, in label order.
    pub const ALL: &'static [PageContext] = &[
        PageContext::Category,
        PageContext::Tag,
        PageContext::PostFormat,
        PageContext::ProductCategory,
        PageContext::ProductTag,
        PageContext::CustomTerm,
        PageContext::Post,
        PageContext::Page,
        PageContext::Homepage,
        PageContext::Product,
        PageContext::CustomContentType,
        PageContext::AuthorArchive,
        PageContext::DateArchive,
        PageContext::CustomContentTypeArchive,
        PageContext::Search,
        PageContext::NotFound,
        PageContext::SitemapIndex,
    ];
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        PageContext::ALL
            .iter()
            .copied()
            .find(|ctx| ctx.as_str() == s)
            .ok_or_else(|| Error::UnknownContext(s.to_string()))
    }
}

/// Resolves context labels, probing the commerce gate at call time.
///
/// The resolver holds no other state: repeated calls with identical inputs
/// and unchanged gate state return identical output.
#[derive(Debug, Clone)]
pub struct ContextResolver<G> {
    gate: G,
}

impl<G: CommerceGate> ContextResolver<G> {
    /// Build a resolver over the given commerce gate.
    pub fn new(gate: G) -> Self {
        Self { gate }
    }

    /// Classify a taxonomy by machine name.
    ///
    /// Commerce taxonomies classify as such only while the commerce plugin
    /// is active; otherwise they fall back to the custom-term label like any
    /// other unrecognized name.
    pub fn determine_for_term(&self, taxonomy: &str) -> PageContext {
        match taxonomy {
            "category" => PageContext::Category,
            "tag" => PageContext::Tag,
            "post_format" => PageContext::PostFormat,
            "product_cat" if self.gate.commerce_active() => PageContext::ProductCategory,
            "product_tag" if self.gate.commerce_active() => PageContext::ProductTag,
            other => {
                debug!(taxonomy = %other, "taxonomy not recognized, using custom-term context");
                PageContext::CustomTerm
            }
        }
    }

    /// Classify a content record; `None` classifies as an ordinary post.
    ///
    /// Front-page designation wins over the record's own type: a page set as
    /// the static front page classifies as `homepage`.
    pub fn determine_for_content(
        &self,
        settings: &SiteSettings,
        content: Option<&Content>,
    ) -> PageContext {
        let Some(content) = content else {
            return PageContext::Post;
        };

        if settings.is_front_page(content) {
            return PageContext::Homepage;
        }

        self.determine_for_content_type(&content.content_type)
    }

    /// Classify a content type by machine name.
    ///
    /// `product` classifies as such only while the commerce plugin is
    /// active; otherwise it falls back to the custom label like any other
    /// unrecognized type.
    pub fn determine_for_content_type(&self, type_name: &str) -> PageContext {
        match type_name {
            "page" => PageContext::Page,
            "post" => PageContext::Post,
            "product" if self.gate.commerce_active() => PageContext::Product,
            other => {
                debug!(content_type = %other, "content type not recognized, using custom context");
                PageContext::CustomContentType
            }
        }
    }

    /// Classify an archive listing by kind. Anything other than the author
    /// and date listings is a content-type archive.
    pub fn determine_for_archive(&self, kind: &str) -> PageContext {
        match kind {
            "author" => PageContext::AuthorArchive,
            "date" => PageContext::DateArchive,
            _ => PageContext::CustomContentTypeArchive,
        }
    }
}
