//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{ArticleRecord, Crop, Picture, PictureData};

/// Base address the fixtures' picture URLs are resolved against
pub const TEST_MEDIA_BASE: &str = "https://cms.example.io/";

/// Create a picture with two crops (`square`/100 first, `wide`/300 second)
pub fn test_picture() -> Picture {
    Picture {
        data: Some(PictureData {
            size: Some(2048),
            content_type: "image/jpeg".to_string(),
        }),
        uri_template: "/img/{cropName}/{width}/pic.jpg".to_string(),
        crops: vec![
            Crop {
                name: Some("square".to_string()),
                min_width: Some(100),
            },
            Crop {
                name: Some("wide".to_string()),
                min_width: Some(300),
            },
        ],
    }
}

/// Create a well-formed article whose title and link derive from `slug`
pub fn test_article(slug: &str) -> ArticleRecord {
    ArticleRecord {
        creation_date: "2021-05-04T10:15:30.123Z".to_string(),
        title: format!("Article {}", slug),
        teaser_text: format!("Teaser for {}", slug),
        remote_link: format!("//example.com/articles/{}", slug),
        picture: Some(test_picture()),
    }
}

/// Wrap records in the GraphQL response envelope of the headless server
pub fn search_response(records: &[ArticleRecord]) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "content": {
                "search": {
                    "numFound": records.len(),
                    "result": records,
                }
            }
        }
    })
}
