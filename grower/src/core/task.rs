//! Per-sample growth task
//!
//! Loads one community model, caps its imports with the sample's medium and
//! runs the two-stage protocol: cooperative tradeoff on the supplied medium,
//! then a second tradeoff on the minimal medium that sustains 95% of the
//! first stage's growth, this time with flux detail.
//!
//! Every failure is absorbed here. The caller only ever sees a
//! [`TaskResult`], never an error.

use std::collections::BTreeMap;
use std::path::PathBuf;

use shared::{FluxTable, GrowthRecord, Medium, SampleId};

use crate::core::medium::{positive_entries, restrict_medium};
use crate::error::{Stage, TaskError};
use crate::traits::{DiagnosticEvent, Diagnostics, ModelLoader};

/// Share of the first-stage growth the minimal medium has to sustain
pub const MINIMAL_GROWTH_FRACTION: f64 = 0.95;

/// Everything one task needs; immutable once dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthJob {
    pub sample: SampleId,
    pub model_path: PathBuf,
    pub tradeoff: f64,
    pub medium: Medium,
}

/// Output of a task that completed both stages
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrowth {
    pub sample: SampleId,
    /// Stage-1 member growth, medium pseudo-member included
    pub growth: Vec<GrowthRecord>,
    /// Stage-2 exchange fluxes, one row per member
    pub exchanges: FluxTable,
}

/// Outcome of one task. Both variants carry the sample they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    Success(SampleGrowth),
    Failure { sample: SampleId },
}

impl TaskResult {
    pub fn sample(&self) -> &SampleId {
        match self {
            TaskResult::Success(growth) => &growth.sample,
            TaskResult::Failure { sample } => sample,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TaskResult::Failure { .. })
    }

    pub fn success(&self) -> Option<&SampleGrowth> {
        match self {
            TaskResult::Success(growth) => Some(growth),
            TaskResult::Failure { .. } => None,
        }
    }
}

/// Run the growth protocol for one sample
pub fn run_growth_task(job: &GrowthJob, loader: &dyn ModelLoader, diagnostics: &dyn Diagnostics) -> TaskResult {
    match grow_sample(job, loader, diagnostics) {
        Ok(growth) => {
            diagnostics.report(DiagnosticEvent::TaskCompleted {
                sample: job.sample.clone(),
                members: growth.growth.len(),
                exchanges: growth.exchanges.cells().count(),
            });
            TaskResult::Success(growth)
        }
        Err(error) => {
            diagnostics.report(DiagnosticEvent::TaskFailed {
                sample: job.sample.clone(),
                error,
            });
            TaskResult::Failure {
                sample: job.sample.clone(),
            }
        }
    }
}

fn grow_sample(job: &GrowthJob, loader: &dyn ModelLoader, diagnostics: &dyn Diagnostics) -> Result<SampleGrowth, TaskError> {
    let mut model = loader.load(&job.model_path)?;

    if !model.supports_quadratic_programming() {
        return Err(TaskError::MissingQpSupport);
    }

    let (medium, coverage) = restrict_medium(&job.medium, &model.exchanges())?;
    diagnostics.report(DiagnosticEvent::MediumCoverage {
        sample: job.sample.clone(),
        coverage,
    });
    model.set_medium(medium);

    let tradeoff = model
        .cooperative_tradeoff(job.tradeoff, false)
        .map_err(TaskError::at(Stage::Tradeoff))?;
    let growth: Vec<GrowthRecord> = tradeoff
        .members
        .iter()
        .map(|member| GrowthRecord {
            member: member.member.clone(),
            growth_rate: member.growth_rate,
            abundance: member.abundance,
            sample: job.sample.clone(),
            tradeoff: job.tradeoff,
        })
        .collect();

    let member_minimums: BTreeMap<String, f64> = tradeoff
        .member_rates()
        .into_iter()
        .map(|(member, rate)| (member, MINIMAL_GROWTH_FRACTION * rate))
        .collect();
    let minimal = model
        .minimal_medium(MINIMAL_GROWTH_FRACTION * tradeoff.growth_rate, &member_minimums)
        .map_err(TaskError::at(Stage::MinimalMedium))?;
    model.set_medium(positive_entries(minimal));

    let detailed = model
        .cooperative_tradeoff(job.tradeoff, true)
        .map_err(TaskError::at(Stage::Exchanges))?;
    let exchanges = detailed.fluxes.ok_or(TaskError::MissingFluxes)?.exchanges_only();

    Ok(SampleGrowth {
        sample: job.sample.clone(),
        growth,
        exchanges,
    })
}
