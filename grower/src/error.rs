//! Grower-specific error types

use std::path::PathBuf;
use thiserror::Error;

use shared::{OptimizationError, SharedError};

#[derive(Error, Debug)]
pub enum GrowError {
    #[error(
        "All numerical optimizations failed ({attempted} samples). This indicates a problem \
         with the solver or numerical instabilities. Check that the models were built with a \
         QP-capable solver. You may also increase the abundance cutoff to create simpler \
         models or restrict the medium."
    )]
    BatchExhaustion { attempted: usize },

    #[error("Configuration error: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    #[error("Invalid manifest: {reason}")]
    InvalidManifest { reason: String },

    #[error("Invalid medium entry for {reaction}: {reason}")]
    InvalidMedium { reaction: String, reason: String },

    #[error("File system operation failed: {operation} on {path}")]
    FileSystemError {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GrowError {
    pub fn config(field: impl Into<String>, value: impl ToString) -> Self {
        GrowError::ConfigurationError {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

pub type GrowResult<T> = Result<T, GrowError>;

/// Failure to materialize a community model from its file
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Optimization stage a solver failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Cooperative tradeoff on the supplied medium
    Tradeoff,
    /// Minimal medium computation
    MinimalMedium,
    /// Cooperative tradeoff on the minimal medium with flux detail
    Exchanges,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Tradeoff => write!(f, "cooperative tradeoff"),
            Stage::MinimalMedium => write!(f, "minimal medium"),
            Stage::Exchanges => write!(f, "exchange fluxes"),
        }
    }
}

/// Task-local failure. Never leaves the growth task; it is reported and
/// turned into a failed result.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("could not load model: {0}")]
    Load(#[from] ModelLoadError),

    #[error(
        "community model was not built with a QP-capable solver; \
         install a QP-capable solver and rebuild the models"
    )]
    MissingQpSupport,

    #[error("medium entry {reaction} has invalid flux {flux}")]
    InvalidMedium { reaction: String, flux: f64 },

    #[error("{stage} failed: {source}")]
    Optimization {
        stage: Stage,
        #[source]
        source: OptimizationError,
    },

    #[error("solver returned no flux detail")]
    MissingFluxes,
}

impl TaskError {
    pub fn at(stage: Stage) -> impl FnOnce(OptimizationError) -> TaskError {
        move |source| TaskError::Optimization { stage, source }
    }
}
