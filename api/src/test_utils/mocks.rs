//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::fixtures::TEST_MEDIA_BASE;
use crate::domain::entities::ArticleRecord;
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

// ============================================================================
// Mock Content Source
// ============================================================================

pub struct MockContentSource {
    articles: Arc<RwLock<Vec<ArticleRecord>>>,
    pub should_fail: Arc<RwLock<bool>>,
    pub calls: Arc<AtomicUsize>,
}

impl Default for MockContentSource {
    fn default() -> Self {
        Self {
            articles: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let source = Self::default();
        *source.should_fail.write().unwrap() = true;
        source
    }

    /// Pre-populate with articles for testing
    pub fn with_articles(self, articles: Vec<ArticleRecord>) -> Self {
        *self.articles.write().unwrap() = articles;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_articles(&self) -> Result<Vec<ArticleRecord>, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().unwrap() {
            return Err(ContentError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.articles.read().unwrap().clone())
    }

    fn base_url(&self) -> &str {
        TEST_MEDIA_BASE
    }
}
