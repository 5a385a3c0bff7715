//! Service implementations
//!
//! This module contains the runtime-facing pieces: the worker pool, the
//! default medium resolver, diagnostics sinks, the JSON model loader and
//! input/output helpers.

pub mod diagnostics;
pub mod inputs;
pub mod medium_resolver;
pub mod model_store;
pub mod runner;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use diagnostics::{MemoryDiagnostics, TracingDiagnostics};
pub use medium_resolver::BroadcastMediumResolver;
pub use model_store::{JsonModelLoader, StoredModel};
pub use runner::ParallelRunner;
