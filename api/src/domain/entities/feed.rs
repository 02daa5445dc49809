//! Feed domain entities
//!
//! The syndication-side projection of articles. A `FeedDocument` is built
//! once per request and handed straight to the renderer.

use serde::Serialize;

/// Channel-level metadata of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMetadata {
    pub title: String,
    pub description: String,
    pub feed_url: String,
    pub language: String,
}

impl Default for ChannelMetadata {
    fn default() -> Self {
        Self {
            title: "Headless RSS Feed".to_string(),
            description: "RSS feed build from CoreMedia Headless Server data".to_string(),
            feed_url: "http://localhost:8080".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Media attached to a feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    pub url: String,
    pub content_type: String,
    /// Size in bytes
    pub length: u64,
}

/// One entry of the feed, derived from exactly one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DDTHH:MM:SS`, no sub-seconds or zone
    pub date: String,
    pub url: String,
    pub enclosure: Enclosure,
}

/// A complete feed, items in article arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedDocument {
    pub channel: ChannelMetadata,
    pub items: Vec<FeedItem>,
}
