//! Aggregated output tables

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::SampleId;

/// Direction of an exchange flux in the community output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Import,
    Export,
}

impl Direction {
    /// Positive flux is an import; zero, negative and missing fluxes are exports.
    pub fn of(flux: Option<f64>) -> Self {
        match flux {
            Some(flux) if flux > 0.0 => Direction::Import,
            _ => Direction::Export,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Import => "import",
            Direction::Export => "export",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row per (sample, member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    pub member: String,
    pub growth_rate: f64,
    pub abundance: Option<f64>,
    pub sample: SampleId,
    pub tradeoff: f64,
}

/// One row per (sample, member, reaction).
///
/// `reaction`, `flux` and `metabolite` are only missing on rows that came
/// from the growth side of the outer merge without any exchange flux.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub member: String,
    pub sample: SampleId,
    pub reaction: Option<String>,
    pub flux: Option<f64>,
    pub abundance: Option<f64>,
    pub metabolite: Option<String>,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthTable {
    pub rows: Vec<GrowthRecord>,
}

impl GrowthTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct samples, in row order
    pub fn samples(&self) -> Vec<&SampleId> {
        let mut samples: Vec<&SampleId> = Vec::new();
        for row in &self.rows {
            if !samples.contains(&&row.sample) {
                samples.push(&row.sample);
            }
        }
        samples
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeTable {
    pub rows: Vec<ExchangeRecord>,
}

impl ExchangeTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn for_sample<'a>(&'a self, sample: &'a SampleId) -> impl Iterator<Item = &'a ExchangeRecord> {
        self.rows.iter().filter(move |row| &row.sample == sample)
    }
}
