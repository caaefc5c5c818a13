//! Recommended replacement variables per context.
//!
//! The admin UI offers a curated subset of replacement variables when an
//! editor configures meta templates. This table keys those subsets by
//! context label. Keys are plain strings so plugins can register
//! recommendations for contexts of their own; lookups for labels without an
//! entry fall back to a default list rather than failing.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::context::PageContext;

/// Variables recommended for any context without an entry of its own.
const DEFAULT_VARS: &[&str] = &["sitename", "title", "sep"];

/// Built-in recommendations, keyed by context label.
const BUILTIN: &[(PageContext, &[&str])] = &[
    (PageContext::Homepage, &["sitename", "sitedesc", "sep"]),
    (
        PageContext::Post,
        &["title", "sitename", "sep", "primary_category"],
    ),
    (PageContext::Page, &["title", "sitename", "sep"]),
    (PageContext::Product, &["title", "sitename", "sep"]),
    (
        PageContext::CustomContentType,
        &["title", "sitename", "sep", "pt_single"],
    ),
    (PageContext::Category, &["term_title", "sitename", "sep"]),
    (PageContext::Tag, &["term_title", "sitename", "sep"]),
    (PageContext::PostFormat, &["term_title", "sitename", "sep"]),
    (
        PageContext::ProductCategory,
        &["term_title", "sitename", "sep"],
    ),
    (PageContext::ProductTag, &["term_title", "sitename", "sep"]),
    (
        PageContext::CustomTerm,
        &["term_title", "term_description", "sitename", "sep"],
    ),
    (PageContext::AuthorArchive, &["name", "sitename", "sep"]),
    (PageContext::DateArchive, &["date", "sitename", "sep"]),
    (
        PageContext::CustomContentTypeArchive,
        &["pt_plural", "sitename", "sep"],
    ),
    (PageContext::Search, &["searchphrase", "sitename", "sep"]),
    (PageContext::NotFound, &["sitename", "sep"]),
    (PageContext::SitemapIndex, &["sitename", "sep"]),
];

/// Recommendation table mapping context labels to ordered variable names.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedReplaceVars {
    #[serde(flatten)]
    table: BTreeMap<String, Vec<String>>,

    #[serde(skip)]
    default_vars: Vec<String>,
}

impl Default for RecommendedReplaceVars {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendedReplaceVars {
    /// Build the table with the built-in recommendations.
    pub fn new() -> Self {
        let table = BUILTIN
            .iter()
            .map(|(ctx, vars)| {
                let vars = vars.iter().map(|v| (*v).to_string()).collect();
                (ctx.as_str().to_string(), vars)
            })
            .collect();

        Self {
            table,
            default_vars: DEFAULT_VARS.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Variables recommended for a context label.
    ///
    /// Labels without an entry yield the default list, so this never fails;
    /// unmatched lookups are logged, not errored.
    pub fn recommended_for(&self, page_type: &str) -> &[String] {
        match self.table.get(page_type) {
            Some(vars) => vars,
            None => {
                debug!(page_type = %page_type, "no recommendation entry, using default variables");
                &self.default_vars
            }
        }
    }

    /// Variables recommended for a resolved context.
    pub fn recommended_for_context(&self, context: PageContext) -> &[String] {
        self.recommended_for(context.as_str())
    }

    /// Append variables to a context's list, creating the entry when absent.
    ///
    /// Variables already present are skipped; insertion order is preserved.
    /// This is how plugins add recommendations for their own contexts.
    pub fn extend<I, S>(&mut self, page_type: &str, vars: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.table.entry(page_type.to_string()).or_default();
        for var in vars {
            let var = var.into();
            if !entry.contains(&var) {
                entry.push(var);
            }
        }
    }

    /// Iterate all (label, variables) entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.table
            .iter()
            .map(|(label, vars)| (label.as_str(), vars.as_slice()))
    }

    /// The whole table as JSON for handoff to the admin UI.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
