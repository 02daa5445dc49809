//! Article domain entity
//!
//! Articles live in the headless server (source of truth). An `ArticleRecord`
//! is the domain's view of one search hit, decoded as-is from GraphQL. Fields
//! the feed depends on are checked once, in [`ArticleRecord::validate`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Helper to deserialize null as default (empty string, empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One `CMArticle` search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// ISO-8601-like, e.g. `2021-05-04T10:15:30.123Z[GMT]`
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub creation_date: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub teaser_text: String,
    /// Protocol-relative, e.g. `//host/path`
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub remote_link: String,
    #[serde(default)]
    pub picture: Option<Picture>,
}

/// Picture attached to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    #[serde(default)]
    pub data: Option<PictureData>,
    /// Path template containing `{cropName}` and `{width}`
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub uri_template: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub crops: Vec<Crop>,
}

/// Blob metadata of a picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureData {
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content_type: String,
}

/// A named image rendition with its minimum width
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_width: Option<u32>,
}

/// An article whose picture, picture data and first crop are known to be complete
#[derive(Debug, Clone, Copy)]
pub struct ValidatedArticle<'a> {
    pub record: &'a ArticleRecord,
    pub uri_template: &'a str,
    pub content_type: &'a str,
    pub size: u64,
    pub crop_name: &'a str,
    pub crop_width: u32,
}

impl ArticleRecord {
    /// Check the nested fields the feed needs. `index` is the record's
    /// position in the result list and only ends up in the error.
    pub fn validate(&self, index: usize) -> Result<ValidatedArticle<'_>, DomainError> {
        let malformed = |reason: &str| DomainError::MalformedRecord {
            index,
            reason: reason.to_string(),
        };

        let picture = self
            .picture
            .as_ref()
            .ok_or_else(|| malformed("missing picture"))?;
        let data = picture
            .data
            .as_ref()
            .ok_or_else(|| malformed("missing picture data"))?;
        let size = data
            .size
            .ok_or_else(|| malformed("missing picture size"))?;
        let crop = picture
            .crops
            .first()
            .ok_or_else(|| malformed("picture has no crops"))?;
        let crop_name = crop
            .name
            .as_deref()
            .ok_or_else(|| malformed("first crop has no name"))?;
        let crop_width = crop
            .min_width
            .ok_or_else(|| malformed("first crop has no minWidth"))?;

        Ok(ValidatedArticle {
            record: self,
            uri_template: &picture.uri_template,
            content_type: &data.content_type,
            size,
            crop_name,
            crop_width,
        })
    }
}
