//! Feed synthesizer
//!
//! Maps article records to feed items. Pure and synchronous: the same
//! records always give the same document.

use crate::domain::entities::{
    ArticleRecord, ChannelMetadata, Enclosure, FeedDocument, FeedItem, ValidatedArticle,
};
use crate::error::DomainError;

/// Length of `YYYY-MM-DDTHH:MM:SS`
const DATE_PREFIX_LEN: usize = 19;

/// Scheme put in front of protocol-relative article links
const ARTICLE_SCHEME: &str = "https:";

/// Builds feed documents for one headless server
#[derive(Debug, Clone)]
pub struct FeedSynthesizer {
    media_base_url: String,
    channel: ChannelMetadata,
}

impl FeedSynthesizer {
    pub fn new(media_base_url: impl Into<String>, channel: ChannelMetadata) -> Self {
        Self {
            media_base_url: media_base_url.into(),
            channel,
        }
    }

    /// Build a document with one item per record, in input order.
    ///
    /// All or nothing: the first malformed record aborts the whole document.
    pub fn build_feed_document(
        &self,
        records: &[ArticleRecord],
    ) -> Result<FeedDocument, DomainError> {
        let items = records
            .iter()
            .enumerate()
            .map(|(index, record)| record.validate(index).map(|a| self.to_item(a)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeedDocument {
            channel: self.channel.clone(),
            items,
        })
    }

    fn to_item(&self, article: ValidatedArticle<'_>) -> FeedItem {
        let record = article.record;

        FeedItem {
            title: record.title.clone(),
            description: record.teaser_text.clone(),
            date: normalize_date(&record.creation_date),
            url: resolve_article_url(&record.remote_link),
            enclosure: Enclosure {
                url: resolve_picture_url(
                    &self.media_base_url,
                    article.uri_template,
                    article.crop_name,
                    article.crop_width,
                ),
                content_type: article.content_type.to_string(),
                length: article.size,
            },
        }
    }
}

/// Keep the first 19 characters (`YYYY-MM-DDTHH:MM:SS`). Shorter input is
/// returned whole.
pub fn normalize_date(creation_date: &str) -> String {
    creation_date.chars().take(DATE_PREFIX_LEN).collect()
}

/// Prefix a protocol-relative link with `https:`.
///
/// Links that already carry a scheme are not detected.
pub fn resolve_article_url(remote_link: &str) -> String {
    format!("{}{}", ARTICLE_SCHEME, remote_link)
}

/// Fill the first `{cropName}` and `{width}` of `uri_template` and anchor
/// the result at `base_url`, with exactly one `/` between them.
pub fn resolve_picture_url(
    base_url: &str,
    uri_template: &str,
    crop_name: &str,
    crop_width: u32,
) -> String {
    let path = uri_template
        .replacen("{cropName}", crop_name, 1)
        .replacen("{width}", &crop_width.to_string(), 1);

    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
