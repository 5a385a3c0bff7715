//! Preflight inspection
//!
//! Runs the cheap part of the growth task (load, capability check, medium
//! restriction) for a sample without invoking the solver.

use serde::{Deserialize, Serialize};

use shared::SampleId;

use crate::core::medium::{restrict_medium, MediumCoverage};
use crate::core::task::GrowthJob;
use crate::traits::ModelLoader;

/// What a growth task would find for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflightReport {
    pub sample: SampleId,
    pub model_id: Option<String>,
    pub loaded: bool,
    pub qp_capable: bool,
    pub exchanges: usize,
    /// Medium entries that name one of the model's exchanges
    pub matched: usize,
    /// Medium entries supplied for the sample
    pub requested: usize,
    pub error: Option<String>,
}

impl PreflightReport {
    fn failed(sample: SampleId, error: String) -> Self {
        Self {
            sample,
            model_id: None,
            loaded: false,
            qp_capable: false,
            exchanges: 0,
            matched: 0,
            requested: 0,
            error: Some(error),
        }
    }

    pub fn coverage(&self) -> MediumCoverage {
        MediumCoverage {
            matched: self.matched,
            requested: self.requested,
        }
    }

    /// Whether the growth task could get past its capability and medium checks
    pub fn is_usable(&self) -> bool {
        self.loaded && self.qp_capable && self.error.is_none()
    }
}

pub fn inspect_sample(job: &GrowthJob, loader: &dyn ModelLoader) -> PreflightReport {
    let model = match loader.load(&job.model_path) {
        Ok(model) => model,
        Err(error) => return PreflightReport::failed(job.sample.clone(), error.to_string()),
    };

    let exchanges = model.exchanges();
    let (coverage, error) = match restrict_medium(&job.medium, &exchanges) {
        Ok((_, coverage)) => (coverage, None),
        Err(error) => (
            MediumCoverage {
                matched: 0,
                requested: job.medium.len(),
            },
            Some(error.to_string()),
        ),
    };

    PreflightReport {
        sample: job.sample.clone(),
        model_id: Some(model.id()),
        loaded: true,
        qp_capable: model.supports_quadratic_programming(),
        exchanges: exchanges.len(),
        matched: coverage.matched,
        requested: coverage.requested,
        error,
    }
}
