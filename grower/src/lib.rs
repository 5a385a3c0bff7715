//! Community growth library for batch metabolic simulations
//!
//! This library runs a two-stage growth protocol on one community model per
//! sample, in parallel, and merges the per-sample results into a growth rate
//! table and a long-form exchange flux table.

pub mod config;
pub mod core;
pub mod error;
pub mod grower;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::GrowConfig;
pub use core::{
    aggregate, run_growth_task, GrowthJob, GrowthResults, Manifest, ManifestEntry, MediumCoverage,
    MediumEntry, PreflightReport, SampleGrowth, TaskResult,
};
pub use error::{GrowError, GrowResult, ModelLoadError, Stage, TaskError};
pub use grower::Grower;
pub use traits::{
    CommunityModel, DiagnosticEvent, Diagnostics, MediumResolver, MockCommunityModel, MockDiagnostics,
    MockMediumResolver, MockModelLoader, ModelLoader,
};
