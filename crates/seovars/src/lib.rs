//! Seovars — recommended replace-variable resolution for SEO meta templates.
//!
//! When an editor configures SEO meta templates (titles, descriptions) in an
//! admin UI, the UI offers a curated subset of replacement variables that
//! make sense for the thing being edited. This crate resolves the context
//! label for that thing — from a taxonomy name, a content record, a content
//! type, or an archive kind — and maps each context to its recommended
//! variable list.
//!
//! Classification is deterministic and side-effect-free apart from one
//! injected capability probe: whether the commerce plugin is active. The
//! probe is read at call time and never cached, so enabling or disabling
//! commerce changes the very next classification.

pub mod context;
pub mod error;
pub mod gate;
pub mod models;
pub mod recommended;
pub mod settings;

pub use context::{ContextResolver, PageContext};
pub use error::{Error, Result};
pub use gate::{CommerceGate, EnabledPlugins, Probe};
pub use models::Content;
pub use recommended::RecommendedReplaceVars;
pub use settings::{ShowOnFront, SiteSettings};
