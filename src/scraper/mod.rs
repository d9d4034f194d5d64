//! Content fetcher for Reddit's read-only JSON API.
//!
//! Fetches a user's submitted posts and comments from the two user-scoped
//! listing endpoints, normalizes them into [`ContentItem`]s, and filters out
//! deleted/removed and empty entries. Transport and parse failures inside a
//! sub-fetch are logged and yield zero items for that sub-fetch; the overall
//! fetch returns whatever was gathered, possibly nothing.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::types::{ContentItem, ContentKind};
use crate::utilities::errors::PersonaError;

/// Base URL for listing requests.
const API_BASE_URL: &str = "https://www.reddit.com";

/// Base URL joined with permalinks to form absolute citation URLs.
const CITATION_BASE_URL: &str = "https://reddit.com";

/// Browser-like identification header; Reddit rejects the default reqwest UA.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout in seconds. No retries.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Reddit serves at most 25 items per unauthenticated listing page.
const PAGE_LIMIT: usize = 25;

/// Default combined post+comment limit, split evenly between the two endpoints.
pub const DEFAULT_LIMIT: usize = 50;

/// Sentinel title/body for user-deleted content.
const DELETED: &str = "[deleted]";

/// Sentinel body for moderator-removed comments.
const REMOVED: &str = "[removed]";

/// Matches the path segment following `/user/` or `/u/` in a profile URL.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/u(?:ser)?/([^/?#]+)").unwrap());

/// Extract the username from a Reddit profile URL.
///
/// Accepts both `.../user/<name>/` and `.../u/<name>` forms; the trailing
/// slash is stripped. URLs carrying neither marker fail with
/// [`PersonaError::InvalidProfileUrl`] before any network call is made.
pub fn extract_username(profile_url: &str) -> Result<String, PersonaError> {
    USERNAME_PATTERN
        .captures(profile_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PersonaError::InvalidProfileUrl {
            url: profile_url.to_string(),
        })
}

/// Fetches user content from Reddit's JSON API.
///
/// Holds the single `reqwest::Client` reused across both sub-fetches.
#[derive(Debug, Clone)]
pub struct RedditScraper {
    client: reqwest::Client,
    base_url: String,
}

impl RedditScraper {
    /// Create a scraper against the public Reddit API.
    pub fn new() -> Result<Self, PersonaError> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a scraper against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, PersonaError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch up to `limit` content items for `username`, split evenly between
    /// submitted posts and comments. The two sub-fetches run sequentially;
    /// a failed sub-fetch contributes zero items and is never fatal.
    pub async fn fetch_user_content(&self, username: &str, limit: usize) -> Vec<ContentItem> {
        let per_type = limit / 2;
        let mut items = Vec::new();

        log::info!("fetching posts for u/{}", username);
        match self
            .fetch_listing(username, "submitted", per_type, ContentKind::Post)
            .await
        {
            Ok(posts) => {
                log::info!("scraped {} posts for u/{}", posts.len(), username);
                items.extend(posts);
            }
            Err(e) => log::warn!("error fetching posts for u/{}: {}", username, e),
        }

        log::info!("fetching comments for u/{}", username);
        match self
            .fetch_listing(username, "comments", per_type, ContentKind::Comment)
            .await
        {
            Ok(comments) => {
                log::info!("scraped {} comments for u/{}", comments.len(), username);
                items.extend(comments);
            }
            Err(e) => log::warn!("error fetching comments for u/{}: {}", username, e),
        }

        items
    }

    /// Fetch and parse one listing endpoint (`submitted` or `comments`),
    /// single page, `limit` capped at [`PAGE_LIMIT`].
    async fn fetch_listing(
        &self,
        username: &str,
        endpoint: &str,
        limit: usize,
        kind: ContentKind,
    ) -> Result<Vec<ContentItem>, PersonaError> {
        let url = format!("{}/user/{}/{}.json", self.base_url, username, endpoint);
        let page_limit = limit.min(PAGE_LIMIT);
        log::debug!("GET {} (limit={})", url, page_limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", page_limit.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let listing: Value = serde_json::from_str(&body)?;
        Ok(parse_listing(&listing, limit, kind))
    }
}

/// Walk a listing envelope (`data.children[].data`) and normalize entries.
///
/// Deleted/removed items and items with no text content are skipped; parsing
/// stops once `limit` items were accepted.
fn parse_listing(listing: &Value, limit: usize, kind: ContentKind) -> Vec<ContentItem> {
    let mut items = Vec::new();

    let children = match listing
        .get("data")
        .and_then(|d| d.get("children"))
        .and_then(Value::as_array)
    {
        Some(children) => children,
        None => {
            log::debug!("listing carries no data.children");
            return items;
        }
    };

    for child in children {
        if items.len() >= limit {
            break;
        }
        let data = match child.get("data") {
            Some(data) => data,
            None => continue,
        };
        let item = match kind {
            ContentKind::Post => parse_post(data),
            ContentKind::Comment => parse_comment(data),
        };
        if let Some(item) = item {
            if item.has_content() {
                items.push(item);
            }
        }
    }

    items
}

/// Normalize a submitted post, or `None` if it was deleted/removed.
fn parse_post(data: &Value) -> Option<ContentItem> {
    if is_removed(data) {
        return None;
    }
    let title = str_field(data, "title");
    if title == DELETED {
        return None;
    }
    Some(ContentItem {
        title,
        body: str_field(data, "selftext"),
        community: str_field(data, "subreddit"),
        score: int_field(data, "score"),
        created_at: timestamp_field(data),
        url: citation_url(&str_field(data, "permalink")),
        kind: ContentKind::Post,
    })
}

/// Normalize a comment, or `None` if it was deleted/removed.
fn parse_comment(data: &Value) -> Option<ContentItem> {
    let body = str_field(data, "body");
    if body == DELETED || body == REMOVED {
        return None;
    }
    Some(ContentItem {
        title: String::new(),
        body,
        community: str_field(data, "subreddit"),
        score: int_field(data, "score"),
        created_at: timestamp_field(data),
        url: citation_url(&str_field(data, "permalink")),
        kind: ContentKind::Comment,
    })
}

/// True when `removed_by_category` is present and non-empty.
fn is_removed(data: &Value) -> bool {
    match data.get("removed_by_category") {
        Some(Value::Null) | None => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_field(data: &Value, key: &str) -> i64 {
    data.get(key).and_then(Value::as_i64).unwrap_or(0)
}

/// `created_utc` arrives as a JSON float; truncate to unix seconds.
fn timestamp_field(data: &Value) -> i64 {
    data.get("created_utc")
        .and_then(Value::as_f64)
        .unwrap_or(0.0) as i64
}

/// Join a permalink onto the citation base URL; empty permalinks stay empty.
fn citation_url(permalink: &str) -> String {
    if permalink.is_empty() {
        String::new()
    } else {
        format!("{}{}", CITATION_BASE_URL, permalink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_username_user_marker() {
        assert_eq!(
            extract_username("https://reddit.com/user/alice/").unwrap(),
            "alice"
        );
    }

    #[test]
    fn test_extract_username_short_marker() {
        assert_eq!(extract_username("https://reddit.com/u/bob").unwrap(), "bob");
    }

    #[test]
    fn test_extract_username_no_marker_is_invalid() {
        let err = extract_username("https://reddit.com/alice").unwrap_err();
        assert!(matches!(err, PersonaError::InvalidProfileUrl { .. }));
    }

    #[test]
    fn test_extract_username_ignores_query() {
        assert_eq!(
            extract_username("https://www.reddit.com/user/alice?sort=new").unwrap(),
            "alice"
        );
    }

    fn post_listing(children: Vec<Value>) -> Value {
        json!({ "data": { "children": children } })
    }

    fn post_child(title: &str, selftext: &str) -> Value {
        json!({
            "data": {
                "title": title,
                "selftext": selftext,
                "subreddit": "rust",
                "score": 42,
                "created_utc": 1650000000.0,
                "permalink": "/r/rust/comments/abc/post/",
            }
        })
    }

    #[test]
    fn test_parse_listing_normalizes_posts() {
        let listing = post_listing(vec![post_child("Hello", "world")]);
        let items = parse_listing(&listing, 10, ContentKind::Post);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Hello");
        assert_eq!(items[0].body, "world");
        assert_eq!(items[0].community, "rust");
        assert_eq!(items[0].score, 42);
        assert_eq!(items[0].created_at, 1650000000);
        assert_eq!(items[0].url, "https://reddit.com/r/rust/comments/abc/post/");
        assert_eq!(items[0].kind, ContentKind::Post);
    }

    #[test]
    fn test_parse_listing_skips_deleted_post() {
        let listing = post_listing(vec![post_child("[deleted]", "gone")]);
        assert!(parse_listing(&listing, 10, ContentKind::Post).is_empty());
    }

    #[test]
    fn test_parse_listing_skips_removed_post() {
        let mut child = post_child("Still titled", "body");
        child["data"]["removed_by_category"] = json!("moderator");
        let listing = post_listing(vec![child]);
        assert!(parse_listing(&listing, 10, ContentKind::Post).is_empty());
    }

    #[test]
    fn test_parse_listing_null_removal_marker_kept() {
        let mut child = post_child("Kept", "body");
        child["data"]["removed_by_category"] = json!(null);
        let listing = post_listing(vec![child]);
        assert_eq!(parse_listing(&listing, 10, ContentKind::Post).len(), 1);
    }

    #[test]
    fn test_parse_listing_skips_empty_content() {
        let listing = post_listing(vec![post_child("", "   ")]);
        assert!(parse_listing(&listing, 10, ContentKind::Post).is_empty());
    }

    #[test]
    fn test_parse_listing_respects_limit() {
        let children = (0..8).map(|i| post_child(&format!("t{}", i), "")).collect();
        let listing = post_listing(children);
        assert_eq!(parse_listing(&listing, 3, ContentKind::Post).len(), 3);
    }

    #[test]
    fn test_parse_listing_comment_sentinels() {
        let comment = |body: &str| {
            json!({
                "data": {
                    "body": body,
                    "subreddit": "rust",
                    "score": 1,
                    "created_utc": 1650000000.0,
                    "permalink": "/r/rust/comments/abc/c1/",
                }
            })
        };
        let listing = post_listing(vec![
            comment("[deleted]"),
            comment("[removed]"),
            comment("a real comment"),
        ]);
        let items = parse_listing(&listing, 10, ContentKind::Comment);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].body, "a real comment");
        assert!(items[0].title.is_empty());
        assert_eq!(items[0].kind, ContentKind::Comment);
    }

    #[test]
    fn test_parse_listing_missing_envelope() {
        assert!(parse_listing(&json!({}), 10, ContentKind::Post).is_empty());
        assert!(parse_listing(&json!({"data": {}}), 10, ContentKind::Comment).is_empty());
    }

    #[test]
    fn test_citation_url_empty_permalink() {
        assert_eq!(citation_url(""), "");
        assert_eq!(citation_url("/r/rust/x"), "https://reddit.com/r/rust/x");
    }
}
