//! Core business logic modules
//!
//! This module contains the growth protocol and result aggregation. Nothing
//! in here touches the file system or the runtime; models and diagnostics
//! come in through the traits.

pub mod aggregator;
pub mod manifest;
pub mod medium;
pub mod preflight;
pub mod task;

pub use aggregator::{aggregate, GrowthResults};
pub use manifest::{Manifest, ManifestEntry};
pub use medium::{MediumCoverage, MediumEntry};
pub use preflight::PreflightReport;
pub use task::{run_growth_task, GrowthJob, SampleGrowth, TaskResult};
