//! Headless server adapter
//!
//! GraphQL client for the CoreMedia headless server.

pub mod client;
pub mod query;

pub use client::HeadlessClientImpl;
pub use query::SearchQuery;
