//! Core data types for the persona pipeline.
//!
//! A [`ContentItem`] is one normalized post or comment fetched from Reddit's
//! JSON API; a [`Persona`] is the structured record the analyzer derives from
//! a batch of them. Both are plain immutable aggregates — built once, never
//! mutated after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder used for every persona list when no content was found.
pub const NO_DATA: &str = "No data available";

/// Placeholder for demographic fields that could not be inferred.
pub const UNKNOWN: &str = "Unknown";

/// Whether a content item is a submitted post or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Comment,
}

/// One normalized piece of user content (post or comment).
///
/// Invariant: at least one of `title`/`body` is non-whitespace; the scraper
/// discards items that fail [`ContentItem::has_content`] at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Post title; empty for comments.
    pub title: String,
    /// Post selftext or comment body.
    pub body: String,
    /// Subreddit the item was posted in (without the `r/` prefix).
    pub community: String,
    /// Net vote score.
    pub score: i64,
    /// Creation time, unix seconds.
    pub created_at: i64,
    /// Absolute permalink, used for citations.
    pub url: String,
    /// Post or comment.
    pub kind: ContentKind,
}

impl ContentItem {
    /// True if the item carries any actual text.
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty() || !self.body.trim().is_empty()
    }
}

/// Inferred demographic fields; each defaults to `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_range: String,
    pub location: String,
    pub occupation: String,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age_range: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
            occupation: UNKNOWN.to_string(),
        }
    }
}

/// Structured persona record summarizing inferred traits of a user.
///
/// Built once per run by [`crate::analyzer::PersonaAnalyzer`] and consumed
/// immediately by [`crate::report`]; no persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub username: String,
    pub demographics: Demographics,
    /// Ordered, at most 10 entries; community-derived entries first.
    pub interests: Vec<String>,
    pub personality_traits: Vec<String>,
    pub behavior_patterns: Vec<String>,
    pub goals_motivations: Vec<String>,
    pub frustrations: Vec<String>,
    pub online_habits: Vec<String>,
    /// Category → citation URLs supporting the persona claims.
    pub citations: BTreeMap<String, Vec<String>>,
}

impl Persona {
    /// Fixed placeholder persona returned when no content was found.
    pub fn empty(username: impl Into<String>) -> Self {
        let no_data = || vec![NO_DATA.to_string()];
        Self {
            username: username.into(),
            demographics: Demographics::default(),
            interests: no_data(),
            personality_traits: no_data(),
            behavior_patterns: no_data(),
            goals_motivations: no_data(),
            frustrations: no_data(),
            online_habits: no_data(),
            citations: BTreeMap::new(),
        }
    }
}
