//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Articles and the feed built from them
//! - `ports`: Trait definitions for external dependencies
//! - `synthesizer`: Article to feed item mapping

pub mod entities;
pub mod ports;
pub mod synthesizer;
