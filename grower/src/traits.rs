//! Trait definitions with mockall annotations for testing
//!
//! The solver, the model store and the medium lookup are external
//! collaborators. These traits are the seams through which they are injected
//! into the pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use shared::{Medium, OptimizationError, SampleId, Solution};

use crate::core::medium::{MediumCoverage, MediumEntry};
use crate::error::{GrowResult, ModelLoadError, TaskError};

/// An optimization-capable community model.
///
/// A model is owned by exactly one growth task for its whole lifetime.
/// `set_medium` followed by `cooperative_tradeoff` is a two-step sequence
/// that is only meaningful inside that exclusive ownership window.
#[mockall::automock]
pub trait CommunityModel: Send {
    /// Identifier the model was built with
    fn id(&self) -> String;

    /// Exchange reaction identifiers of the community
    fn exchanges(&self) -> Vec<String>;

    /// Currently active medium
    fn medium(&self) -> Medium;

    /// Replace the active medium. Reactions not present in the medium are closed for import.
    fn set_medium(&mut self, medium: Medium);

    /// Whether the attached solver can handle quadratic objectives
    fn supports_quadratic_programming(&self) -> bool;

    /// Run cooperative tradeoff at `fraction` of the maximal community growth.
    /// Flux detail is only returned when `fluxes` is set.
    fn cooperative_tradeoff(&mut self, fraction: f64, fluxes: bool) -> Result<Solution, OptimizationError>;

    /// Smallest import medium sustaining the given community and member growth rates
    fn minimal_medium(
        &mut self,
        community_growth: f64,
        member_growth: &BTreeMap<String, f64>,
    ) -> Result<Medium, OptimizationError>;
}

/// Materializes community models from the model store
#[mockall::automock]
pub trait ModelLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Box<dyn CommunityModel>, ModelLoadError>;
}

/// Resolves a raw medium specification into one medium slice per sample
#[mockall::automock]
#[async_trait::async_trait]
pub trait MediumResolver: Send + Sync {
    /// # Returns
    /// One entry per requested sample; samples without any medium entry map to an empty medium
    async fn resolve(
        &self,
        medium: &[MediumEntry],
        samples: &[SampleId],
    ) -> GrowResult<BTreeMap<SampleId, Medium>>;
}

/// Something a growth task wants surfaced to the operator
#[derive(Debug)]
pub enum DiagnosticEvent {
    /// How much of the requested medium matched the model's exchanges
    MediumCoverage {
        sample: SampleId,
        coverage: MediumCoverage,
    },
    /// The task finished both optimization stages
    TaskCompleted {
        sample: SampleId,
        members: usize,
        exchanges: usize,
    },
    /// The task was abandoned; its sample is dropped from the output
    TaskFailed { sample: SampleId, error: TaskError },
    /// The task panicked inside the worker pool
    TaskPanicked { sample: SampleId, message: String },
}

impl DiagnosticEvent {
    pub fn sample(&self) -> &SampleId {
        match self {
            DiagnosticEvent::MediumCoverage { sample, .. }
            | DiagnosticEvent::TaskCompleted { sample, .. }
            | DiagnosticEvent::TaskFailed { sample, .. }
            | DiagnosticEvent::TaskPanicked { sample, .. } => sample,
        }
    }
}

/// Diagnostics sink injected into every task
#[mockall::automock]
pub trait Diagnostics: Send + Sync {
    fn report(&self, event: DiagnosticEvent);
}
