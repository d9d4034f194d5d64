//! # reddit-persona
//!
//! Generate a heuristic user persona from a Reddit profile's public posts
//! and comments.
//!
//! The pipeline is strictly sequential: the [`scraper`] fetches up to a fixed
//! number of normalized content items from Reddit's read-only JSON API, the
//! [`analyzer`] derives a [`types::Persona`] via keyword and frequency
//! analysis, and the [`report`] module renders it as a sectioned text
//! document with source citations.

pub mod analyzer;
pub mod cli;
pub mod report;
pub mod scraper;
pub mod types;
pub mod utilities;

// Re-exports
pub use analyzer::PersonaAnalyzer;
pub use scraper::{extract_username, RedditScraper, DEFAULT_LIMIT};
pub use types::{ContentItem, ContentKind, Demographics, Persona};
pub use utilities::errors::PersonaError;

/// Library version.
pub const VERSION: &str = "0.1.0";
