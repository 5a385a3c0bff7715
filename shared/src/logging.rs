//! Shared logging utilities for consistent tracing across the pipeline

use crate::types::RunId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Default filter directive for the workspace crates at the given level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("grower={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level.
///
/// `RUST_LOG` takes precedence over the level when it is set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize tracing subscriber at info level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for sample-aware info logging
#[macro_export]
macro_rules! sample_info {
    ($sample:expr, $($arg:tt)*) => {
        tracing::info!(
            sample = %$sample,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for sample-aware warning logging
#[macro_export]
macro_rules! sample_warn {
    ($sample:expr, $($arg:tt)*) => {
        tracing::warn!(
            sample = %$sample,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for sample-aware error logging
#[macro_export]
macro_rules! sample_error {
    ($sample:expr, $($arg:tt)*) => {
        tracing::error!(
            sample = %$sample,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for sample-aware debug logging
#[macro_export]
macro_rules! sample_debug {
    ($sample:expr, $($arg:tt)*) => {
        tracing::debug!(
            sample = %$sample,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for the start of a batch
pub fn log_startup(run_id: &RunId, details: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(run_id: &RunId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        run = %run_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(run_id: &RunId, message: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(run_id: &RunId, action: &str, details: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
