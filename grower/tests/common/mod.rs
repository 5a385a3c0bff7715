//! Common test utilities and infrastructure
//!
//! Scripted community models, a loader serving them and builders for
//! growers wired to in-memory diagnostics.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::{CommunityScript, FakeLoader, TestFixtures};
pub use helpers::{GrowerBuilder, TestGrower, TestHelpers};
