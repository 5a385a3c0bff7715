//! Diagnostics sinks
//!
//! `TracingDiagnostics` renders task events as sample-tagged log lines.
//! `MemoryDiagnostics` keeps them for callers that want to inspect or
//! report them after the batch.

use std::sync::Mutex;

use shared::{sample_debug, sample_error, sample_info, sample_warn};

use crate::error::TaskError;
use crate::traits::{DiagnosticEvent, Diagnostics};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::MediumCoverage { sample, coverage } => {
                sample_info!(sample, "{} import reactions found in model", coverage);
                if coverage.matched == 0 && coverage.requested > 0 {
                    sample_warn!(sample, "⚠️ No medium entry matches the model, running on default bounds");
                }
            }
            DiagnosticEvent::TaskCompleted {
                sample,
                members,
                exchanges,
            } => {
                sample_debug!(sample, "✅ Growth task finished: {} members, {} exchange fluxes", members, exchanges);
            }
            DiagnosticEvent::TaskFailed { sample, error } => match error {
                TaskError::MissingQpSupport | TaskError::Load(_) => {
                    sample_error!(sample, "❌ {}", error);
                }
                TaskError::Optimization { .. } | TaskError::MissingFluxes => {
                    sample_warn!(sample, "⚠️ Could not solve cooperative tradeoff: {}", error);
                }
                TaskError::InvalidMedium { .. } => {
                    sample_warn!(sample, "⚠️ Skipping sample: {}", error);
                }
            },
            DiagnosticEvent::TaskPanicked { sample, message } => {
                sample_error!(sample, "❌ Growth task panicked: {}", message);
            }
        }
    }
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything reported so far
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, event: DiagnosticEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
