//! Feed handlers
//!
//! Every request, whatever its method or path, gets the current RSS feed.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::feed::{render_rss, RSS_CONTENT_TYPE};
use crate::AppState;

/// ANY /*
///
/// Fetches the article page, builds the feed and returns it as RSS XML.
/// Upstream failures and malformed records become a 502.
pub async fn get_feed(State(state): State<AppState>) -> Result<Response, AppError> {
    let document = state.feed_service.generate_feed().await?;

    Ok((
        [(header::CONTENT_TYPE, RSS_CONTENT_TYPE)],
        render_rss(&document),
    )
        .into_response())
}
