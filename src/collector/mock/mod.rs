//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs`, pre-built scenarios and the raw `/proc`
//! samples they are built from, for testing collectors without requiring
//! actual Linux `/proc` filesystem access.

pub mod fixtures;
mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
