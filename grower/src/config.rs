//! Batch configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{GrowError, GrowResult};

fn default_tradeoff() -> f64 {
    0.5
}

fn default_threads() -> usize {
    1
}

/// Parameters of one growth batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowConfig {
    /// Directory the manifest's model files are resolved against
    pub model_dir: PathBuf,
    /// Fraction of maximal community growth enforced during cooperative tradeoff, in (0, 1]
    #[serde(default = "default_tradeoff")]
    pub tradeoff: f64,
    /// Concurrent workers; each holds one model in memory
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl GrowConfig {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            tradeoff: default_tradeoff(),
            threads: default_threads(),
        }
    }

    pub fn with_tradeoff(mut self, tradeoff: f64) -> Self {
        self.tradeoff = tradeoff;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> GrowResult<()> {
        if !(self.tradeoff > 0.0 && self.tradeoff <= 1.0) {
            return Err(GrowError::config("tradeoff", self.tradeoff));
        }
        if self.threads == 0 {
            return Err(GrowError::config("threads", self.threads));
        }
        Ok(())
    }
}
