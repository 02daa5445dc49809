//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod headless;

pub use headless::{HeadlessClientImpl, SearchQuery};
