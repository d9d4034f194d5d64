//! Heuristic persona analyzer.
//!
//! Derives a [`Persona`] from a batch of [`ContentItem`]s via independent,
//! order-insensitive extraction routines: a community tally, keyword-table
//! matches over the aggregated lowercase text, post/comment and sentiment
//! ratios, and score-ranked citations. Everything here is pure — no network,
//! no IO.

pub mod keywords;

use std::collections::BTreeMap;

use crate::types::{ContentItem, ContentKind, Demographics, Persona};
use crate::utilities::string_utils::title_case;

/// Number of tallied communities kept for analysis.
const TOP_COMMUNITIES: usize = 10;

/// Number of top communities contributing an interest entry.
const COMMUNITY_INTERESTS: usize = 5;

/// Hard cap on the interests list.
const MAX_INTERESTS: usize = 10;

/// Number of highest-scored items cited.
const CITATION_COUNT: usize = 5;

/// Mean score above which content is considered well received.
const ENGAGEMENT_THRESHOLD: f64 = 10.0;

/// One sentiment side must exceed the other by this factor to register.
const SENTIMENT_RATIO: f64 = 1.5;

/// Derives personas from fetched content. Stateless; holds no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaAnalyzer;

impl PersonaAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Build a persona for `username` from `items`.
    ///
    /// An empty batch yields the fixed placeholder persona without touching
    /// the keyword tables.
    pub fn analyze(&self, username: &str, items: &[ContentItem]) -> Persona {
        if items.is_empty() {
            return Persona::empty(username);
        }

        let tally = community_tally(items);
        let top = top_communities(&tally);
        let text = aggregate_text(items);

        Persona {
            username: username.to_string(),
            demographics: infer_demographics(&text),
            interests: extract_interests(&text, &top),
            personality_traits: extract_personality_traits(items),
            behavior_patterns: extract_behavior_patterns(items, &tally),
            goals_motivations: match_categories(&text, keywords::GOAL_KEYWORDS),
            frustrations: match_categories(&text, keywords::FRUSTRATION_KEYWORDS),
            online_habits: extract_online_habits(items, &tally),
            citations: create_citations(items),
        }
    }
}

/// Lowercased titles and bodies of every item, in item order, joined by
/// single spaces. Empty fields contribute nothing.
fn aggregate_text(items: &[ContentItem]) -> String {
    let mut parts = Vec::new();
    for item in items {
        if !item.title.is_empty() {
            parts.push(item.title.to_lowercase());
        }
        if !item.body.is_empty() {
            parts.push(item.body.to_lowercase());
        }
    }
    parts.join(" ")
}

/// Count each community value, preserving first-seen order.
fn community_tally(items: &[ContentItem]) -> Vec<(String, usize)> {
    let mut tally: Vec<(String, usize)> = Vec::new();
    for item in items {
        if item.community.is_empty() {
            continue;
        }
        match tally.iter_mut().find(|(name, _)| *name == item.community) {
            Some((_, count)) => *count += 1,
            None => tally.push((item.community.clone(), 1)),
        }
    }
    tally
}

/// Tally sorted descending by count (stable, so ties keep first-seen order),
/// truncated to the top 10.
fn top_communities(tally: &[(String, usize)]) -> Vec<(String, usize)> {
    let mut top = tally.to_vec();
    top.sort_by(|a, b| b.1.cmp(&a.1));
    top.truncate(TOP_COMMUNITIES);
    top
}

/// Top communities first, then matching interest categories; capped at 10.
fn extract_interests(text: &str, top: &[(String, usize)]) -> Vec<String> {
    let mut interests: Vec<String> = top
        .iter()
        .take(COMMUNITY_INTERESTS)
        .map(|(name, _)| format!("r/{} community", name))
        .collect();

    for (label, words) in keywords::INTEREST_KEYWORDS {
        if words.iter().any(|kw| text.contains(kw)) {
            interests.push(title_case(label));
        }
    }

    interests.truncate(MAX_INTERESTS);
    interests
}

/// Posting-ratio trait plus an exclusive sentiment trait.
///
/// Sentiment runs over lowercased bodies only (titles excluded) and counts
/// each word list by presence: a word contributes at most 1 however often it
/// occurs.
fn extract_personality_traits(items: &[ContentItem]) -> Vec<String> {
    let mut traits = Vec::new();

    let posts = items.iter().filter(|i| i.kind == ContentKind::Post).count();
    let comments = items
        .iter()
        .filter(|i| i.kind == ContentKind::Comment)
        .count();
    if comments > posts {
        traits.push("More of a commenter than poster".to_string());
    }
    if posts > comments {
        traits.push("Active content creator".to_string());
    }

    let bodies = items
        .iter()
        .filter(|i| !i.body.is_empty())
        .map(|i| i.body.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let positive = keywords::POSITIVE_WORDS
        .iter()
        .filter(|w| bodies.contains(**w))
        .count();
    let negative = keywords::NEGATIVE_WORDS
        .iter()
        .filter(|w| bodies.contains(**w))
        .count();

    if positive as f64 > negative as f64 * SENTIMENT_RATIO {
        traits.push("Generally positive attitude".to_string());
    } else if negative as f64 > positive as f64 * SENTIMENT_RATIO {
        traits.push("Critical thinker".to_string());
    }

    traits
}

/// Distinct-community line, plus an engagement line when the mean score
/// exceeds the threshold.
fn extract_behavior_patterns(items: &[ContentItem], tally: &[(String, usize)]) -> Vec<String> {
    let mut patterns = vec![format!("Active in {} different subreddits", tally.len())];

    let avg_score = items.iter().map(|i| i.score).sum::<i64>() as f64 / items.len() as f64;
    if avg_score > ENGAGEMENT_THRESHOLD {
        patterns.push("Posts tend to receive good engagement".to_string());
    }

    patterns
}

/// Location and occupation by first keyword match; age range is never
/// inferred.
fn infer_demographics(text: &str) -> Demographics {
    let mut demographics = Demographics::default();

    for location in keywords::LOCATION_KEYWORDS {
        if text.contains(location) {
            demographics.location = title_case(location);
            break;
        }
    }

    for (occupation, words) in keywords::OCCUPATION_KEYWORDS {
        if words.iter().any(|kw| text.contains(kw)) {
            demographics.occupation = title_case(occupation);
            break;
        }
    }

    demographics
}

/// Every label whose keyword set matches the text, in table order.
fn match_categories(text: &str, table: &[(&str, &[&str])]) -> Vec<String> {
    table
        .iter()
        .filter(|(_, words)| words.iter().any(|kw| text.contains(kw)))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Top-community line (ties broken by first-seen order) plus a total count.
fn extract_online_habits(items: &[ContentItem], tally: &[(String, usize)]) -> Vec<String> {
    let mut habits = Vec::new();

    let mut best: Option<&(String, usize)> = None;
    for entry in tally {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    if let Some((top, _)) = best {
        habits.push(format!("Most active in r/{}", top));
    }

    habits.push(format!("Has made {} posts/comments", items.len()));
    habits
}

/// URLs of the top 5 items by score (stable sort, original order on ties),
/// skipping empty URLs, under the `top_content` category.
fn create_citations(items: &[ContentItem]) -> BTreeMap<String, Vec<String>> {
    let mut ranked: Vec<&ContentItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let urls: Vec<String> = ranked
        .iter()
        .take(CITATION_COUNT)
        .filter(|i| !i.url.is_empty())
        .map(|i| i.url.clone())
        .collect();

    let mut citations = BTreeMap::new();
    citations.insert("top_content".to_string(), urls);
    citations
}
