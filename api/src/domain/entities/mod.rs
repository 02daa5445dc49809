//! Domain entities
//!
//! Pure domain models: articles as the headless server returns them and
//! the feed they are turned into.

pub mod article;
pub mod feed;

pub use article::{ArticleRecord, Crop, Picture, PictureData, ValidatedArticle};
pub use feed::{ChannelMetadata, Enclosure, FeedDocument, FeedItem};
