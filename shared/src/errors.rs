//! Shared error types for the growth pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid sample id: {input:?}")]
    InvalidSampleId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Failure reported by a model's optimization capability
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizationError {
    #[error("Solver returned status {status}")]
    Infeasible { status: String },

    #[error("Numerical problem in solver: {message}")]
    Numerical { message: String },

    #[error("No solver is attached to this model")]
    SolverUnavailable,
}
