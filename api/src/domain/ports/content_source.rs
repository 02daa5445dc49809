//! Content source port trait
//!
//! Defines the interface for reading articles from the headless server.

use async_trait::async_trait;

use crate::domain::entities::ArticleRecord;
use crate::error::ContentError;

/// Port trait for the remote content source
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run the configured article search and return its result list
    /// unchanged, in the order the source sent it.
    async fn fetch_articles(&self) -> Result<Vec<ArticleRecord>, ContentError>;

    /// Base address pictures are anchored to
    fn base_url(&self) -> &str;
}
