//! Feed service
//!
//! Runs the per-request pipeline: fetch articles from the content source,
//! then synthesize the feed document from them.

use std::sync::Arc;

use crate::domain::entities::{ChannelMetadata, FeedDocument};
use crate::domain::ports::ContentSource;
use crate::domain::synthesizer::FeedSynthesizer;
use crate::error::AppError;

/// Service for generating the article feed
pub struct FeedService<CS>
where
    CS: ContentSource,
{
    content: Arc<CS>,
    synthesizer: FeedSynthesizer,
}

impl<CS> FeedService<CS>
where
    CS: ContentSource,
{
    pub fn new(content: Arc<CS>, channel: ChannelMetadata) -> Self {
        let synthesizer = FeedSynthesizer::new(content.base_url(), channel);
        Self {
            content,
            synthesizer,
        }
    }

    /// Fetch the current article page and build a fresh document from it.
    /// Nothing is cached between calls.
    pub async fn generate_feed(&self) -> Result<FeedDocument, AppError> {
        let records = self.content.fetch_articles().await?;
        let document = self.synthesizer.build_feed_document(&records)?;

        tracing::debug!("Built feed with {} items", document.items.len());
        Ok(document)
    }
}
