//! Data models.

pub mod content;

pub use content::Content;
