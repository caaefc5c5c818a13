#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Context classification tests.
//!
//! Covers the full term/content classification matrix, the front-page
//! override, and the commerce gate behavior.

use std::cell::Cell;

use seovars::gate::{COMMERCE_PLUGIN, EnabledPlugins, Probe};
use seovars::{ContextResolver, PageContext, SiteSettings};
use seovars_test_utils::{default_settings, front_page_settings, test_content};

fn resolver(commerce_active: bool) -> ContextResolver<bool> {
    ContextResolver::new(commerce_active)
}

// -------------------------------------------------------------------------
// determine_for_term
// -------------------------------------------------------------------------

#[test]
fn term_category() {
    assert_eq!(
        resolver(false).determine_for_term("category"),
        PageContext::Category
    );
}

#[test]
fn term_tag() {
    assert_eq!(resolver(false).determine_for_term("tag"), PageContext::Tag);
}

#[test]
fn term_post_format() {
    assert_eq!(
        resolver(false).determine_for_term("post_format"),
        PageContext::PostFormat
    );
}

#[test]
fn term_product_category_with_commerce() {
    assert_eq!(
        resolver(true).determine_for_term("product_cat"),
        PageContext::ProductCategory
    );
}

#[test]
fn term_product_category_without_commerce() {
    assert_eq!(
        resolver(false).determine_for_term("product_cat"),
        PageContext::CustomTerm
    );
}

#[test]
fn term_product_tag_with_commerce() {
    assert_eq!(
        resolver(true).determine_for_term("product_tag"),
        PageContext::ProductTag
    );
}

#[test]
fn term_product_tag_without_commerce() {
    assert_eq!(
        resolver(false).determine_for_term("product_tag"),
        PageContext::CustomTerm
    );
}

#[test]
fn term_unmatched_taxonomies_classify_as_custom() {
    let resolver = resolver(true);
    for taxonomy in ["genre", "region", "series", ""] {
        assert_eq!(
            resolver.determine_for_term(taxonomy),
            PageContext::CustomTerm,
            "taxonomy {taxonomy:?}"
        );
    }
}

#[test]
fn term_custom_label_keeps_historic_spelling() {
    let label = resolver(false).determine_for_term("genre");
    assert_eq!(label.as_str(), "term-in-custom-taxomomy");
}

// -------------------------------------------------------------------------
// determine_for_content
// -------------------------------------------------------------------------

#[test]
fn content_none_is_a_post() {
    let settings = default_settings();
    assert_eq!(
        resolver(false).determine_for_content(&settings, None),
        PageContext::Post
    );
}

#[test]
fn content_designated_front_page_is_the_homepage() {
    let page = test_content("page").build();
    let settings = front_page_settings(&page);

    assert_eq!(
        resolver(false).determine_for_content(&settings, Some(&page)),
        PageContext::Homepage
    );
}

#[test]
fn content_front_page_designation_only_matches_the_designated_record() {
    let front = test_content("page").build();
    let other = test_content("page").build();
    let settings = front_page_settings(&front);

    assert_eq!(
        resolver(false).determine_for_content(&settings, Some(&other)),
        PageContext::Page
    );
}

#[test]
fn content_front_page_designation_overrides_the_type() {
    // Designating any record as the front page wins over its own type.
    let product = test_content("product").build();
    let settings = front_page_settings(&product);

    assert_eq!(
        resolver(true).determine_for_content(&settings, Some(&product)),
        PageContext::Homepage
    );
}

#[test]
fn content_page() {
    let page = test_content("page").build();
    let settings = default_settings();

    assert_eq!(
        resolver(false).determine_for_content(&settings, Some(&page)),
        PageContext::Page
    );
}

#[test]
fn content_post() {
    let post = test_content("post").build();
    let settings = default_settings();

    assert_eq!(
        resolver(false).determine_for_content(&settings, Some(&post)),
        PageContext::Post
    );
}

#[test]
fn content_product_with_commerce() {
    let product = test_content("product").build();
    let settings = default_settings();

    assert_eq!(
        resolver(true).determine_for_content(&settings, Some(&product)),
        PageContext::Product
    );
}

#[test]
fn content_product_without_commerce() {
    let product = test_content("product").build();
    let settings = default_settings();

    assert_eq!(
        resolver(false).determine_for_content(&settings, Some(&product)),
        PageContext::CustomContentType
    );
}

#[test]
fn content_unmatched_types_classify_as_custom() {
    let resolver = resolver(true);
    let settings = default_settings();
    for content_type in ["event", "some_plugin_type", ""] {
        let content = test_content(content_type).build();
        assert_eq!(
            resolver.determine_for_content(&settings, Some(&content)),
            PageContext::CustomContentType,
            "content type {content_type:?}"
        );
    }
}

// -------------------------------------------------------------------------
// gate behavior
// -------------------------------------------------------------------------

#[test]
fn gate_is_probed_at_call_time() {
    let active = Cell::new(false);
    let resolver = ContextResolver::new(Probe(|| active.get()));

    assert_eq!(
        resolver.determine_for_term("product_cat"),
        PageContext::CustomTerm
    );

    active.set(true);
    assert_eq!(
        resolver.determine_for_term("product_cat"),
        PageContext::ProductCategory
    );
}

#[test]
fn gate_via_enabled_plugins() {
    let mut plugins = EnabledPlugins::new(["blog"]);
    assert_eq!(
        ContextResolver::new(&plugins).determine_for_term("product_tag"),
        PageContext::CustomTerm
    );

    plugins.enable(COMMERCE_PLUGIN);
    assert_eq!(
        ContextResolver::new(&plugins).determine_for_term("product_tag"),
        PageContext::ProductTag
    );
}

#[test]
fn classification_is_idempotent() {
    let resolver = resolver(true);
    let settings = SiteSettings::new();
    let product = test_content("product").build();

    for _ in 0..3 {
        assert_eq!(
            resolver.determine_for_term("product_cat"),
            PageContext::ProductCategory
        );
        assert_eq!(
            resolver.determine_for_content(&settings, Some(&product)),
            PageContext::Product
        );
    }
}
