//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain logic, ports, and external systems.

pub mod feed_service;

pub use feed_service::FeedService;
