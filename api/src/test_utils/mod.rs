//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The upstream GraphQL server is faked two ways: `MockContentSource` for
//! service-level tests, and wiremock (see the adapter and integration tests)
//! when the real HTTP client should be exercised.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
