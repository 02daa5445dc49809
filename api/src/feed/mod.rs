//! Feed module
//!
//! RSS rendering of feed documents.

pub mod renderer;

pub use renderer::{render_rss, RSS_CONTENT_TYPE};
