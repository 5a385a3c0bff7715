//! Medium restriction and coverage
//!
//! A requested medium is only ever applied to a model after it has been
//! restricted to the model's own exchange reactions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use shared::{Medium, SampleId};

use crate::error::TaskError;

/// One row of a raw medium specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediumEntry {
    pub reaction: String,
    pub flux: f64,
    /// Entries without a sample apply to every sample
    #[serde(default)]
    pub sample_id: Option<SampleId>,
}

impl MediumEntry {
    pub fn global(reaction: impl Into<String>, flux: f64) -> Self {
        Self {
            reaction: reaction.into(),
            flux,
            sample_id: None,
        }
    }

    pub fn for_sample(sample: SampleId, reaction: impl Into<String>, flux: f64) -> Self {
        Self {
            reaction: reaction.into(),
            flux,
            sample_id: Some(sample),
        }
    }
}

/// Fraction of requested medium entries that matched a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumCoverage {
    pub matched: usize,
    pub requested: usize,
}

impl MediumCoverage {
    pub fn ratio(&self) -> f64 {
        if self.requested == 0 {
            return 0.0;
        }
        self.matched as f64 / self.requested as f64
    }

    pub fn is_complete(&self) -> bool {
        self.matched == self.requested
    }
}

impl fmt::Display for MediumCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.matched, self.requested)
    }
}

/// Keep only the medium entries whose reaction is one of `exchanges`.
///
/// Fails on negative or non-finite bounds instead of handing them to the solver.
pub fn restrict_medium(medium: &Medium, exchanges: &[String]) -> Result<(Medium, MediumCoverage), TaskError> {
    if let Some((reaction, flux)) = medium.iter().find(|(_, flux)| !flux.is_finite() || **flux < 0.0) {
        return Err(TaskError::InvalidMedium {
            reaction: reaction.clone(),
            flux: *flux,
        });
    }

    let known: HashSet<&str> = exchanges.iter().map(String::as_str).collect();
    let restricted: Medium = medium
        .iter()
        .filter(|(reaction, _)| known.contains(reaction.as_str()))
        .map(|(reaction, flux)| (reaction.clone(), *flux))
        .collect();

    let coverage = MediumCoverage {
        matched: restricted.len(),
        requested: medium.len(),
    };
    Ok((restricted, coverage))
}

/// Strictly positive entries of a medium
pub fn positive_entries(medium: Medium) -> Medium {
    medium.into_iter().filter(|(_, flux)| *flux > 0.0).collect()
}
