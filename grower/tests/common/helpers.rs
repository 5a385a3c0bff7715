//! Test helpers and builder patterns for growth batch tests

use grower::services::{BroadcastMediumResolver, MemoryDiagnostics};
use grower::{DiagnosticEvent, GrowConfig, Grower};

use super::fixtures::{CommunityScript, FakeLoader, TestFixtures};

pub type TestGrower = Grower<FakeLoader, BroadcastMediumResolver, MemoryDiagnostics>;

/// Builder for growers over scripted communities
pub struct GrowerBuilder {
    loader: FakeLoader,
    tradeoff: f64,
    threads: usize,
}

impl GrowerBuilder {
    pub fn new() -> Self {
        Self {
            loader: FakeLoader::new(),
            tradeoff: 0.5,
            threads: 2,
        }
    }

    pub fn with_model(mut self, sample: &str, script: CommunityScript) -> Self {
        self.loader = self.loader.with_model(sample, script);
        self
    }

    pub fn with_tradeoff(mut self, tradeoff: f64) -> Self {
        self.tradeoff = tradeoff;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> TestGrower {
        let config = GrowConfig::new(TestFixtures::MODEL_DIR)
            .with_tradeoff(self.tradeoff)
            .with_threads(self.threads);
        Grower::new(config, self.loader, BroadcastMediumResolver::new(), MemoryDiagnostics::new()).unwrap()
    }
}

impl Default for GrowerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Samples that had a failed or panicked task, sorted
    pub fn failed_samples(events: &[DiagnosticEvent]) -> Vec<String> {
        let mut failed: Vec<String> = events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    DiagnosticEvent::TaskFailed { .. } | DiagnosticEvent::TaskPanicked { .. }
                )
            })
            .map(|event| event.sample().to_string())
            .collect();
        failed.sort();
        failed
    }

    /// Coverage strings ("m/n") reported for `sample`
    pub fn coverage_of(events: &[DiagnosticEvent], sample: &str) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match event {
                DiagnosticEvent::MediumCoverage { sample: s, coverage } if s.as_str() == sample => {
                    Some(coverage.to_string())
                }
                _ => None,
            })
            .collect()
    }
}
