//! Headless server GraphQL client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use super::query::SearchQuery;
use crate::domain::entities::ArticleRecord;
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

const GRAPHQL_ENDPOINT: &str = "graphql";

/// Implementation of the content source against the headless server
pub struct HeadlessClientImpl {
    http: Client,
    base_url: String,
    search: SearchQuery,
    timeout: Duration,
}

impl HeadlessClientImpl {
    pub fn new(base_url: String, search: SearchQuery, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            search,
            timeout,
        }
    }

    fn graphql_url(&self) -> String {
        format!("{}/{}", self.base_url, GRAPHQL_ENDPOINT)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ContentError {
        if e.is_timeout() {
            ContentError::Timeout(self.timeout.as_secs())
        } else if e.is_decode() {
            ContentError::Deserialization(e.to_string())
        } else {
            ContentError::Request(e)
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<ArticleRecord>, ContentError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        extract_result(body)
    }
}

/// Response types from the GraphQL endpoint
#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    content: Option<ContentData>,
}

#[derive(Deserialize)]
struct ContentData {
    search: Option<SearchData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchData {
    num_found: Option<i64>,
    result: Option<Vec<ArticleRecord>>,
}

/// Pull `data.content.search.result` out of a response
fn extract_result(body: GraphQlResponse) -> Result<Vec<ArticleRecord>, ContentError> {
    let errors: Vec<String> = body
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    let search = body
        .data
        .and_then(|d| d.content)
        .and_then(|c| c.search);

    match search {
        Some(SearchData {
            num_found,
            result: Some(result),
        }) => {
            if !errors.is_empty() {
                tracing::warn!("Headless search returned errors: {}", errors.join("; "));
            }
            tracing::debug!(
                "Headless search returned {} of {} results",
                result.len(),
                num_found.unwrap_or_default()
            );
            Ok(result)
        }
        _ if !errors.is_empty() => Err(ContentError::GraphQl(errors.join("; "))),
        _ => Err(ContentError::MissingResult),
    }
}

#[async_trait]
impl ContentSource for HeadlessClientImpl {
    async fn fetch_articles(&self) -> Result<Vec<ArticleRecord>, ContentError> {
        let response = self
            .http
            .post(self.graphql_url())
            .header(header::ACCEPT, "application/json")
            .header(header::ACCEPT_CHARSET, "utf-8")
            .json(&self.search.to_request())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        self.handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
