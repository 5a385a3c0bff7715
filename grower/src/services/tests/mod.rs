//! Service-specific tests
//!
//! Each service has its own test file; shared builders live in `common`.

mod model_store;

// Common test utilities for services
pub mod common {
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::time::timeout;

    use shared::{FluxTable, GrowthRecord, Medium, SampleId};

    use crate::core::task::{GrowthJob, SampleGrowth, TaskResult};

    /// Standard timeout for async operations in tests
    pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    /// Helper to run async operations with timeout
    pub async fn with_timeout<T, F>(future: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: std::future::Future<Output = T>,
    {
        timeout(TEST_TIMEOUT, future).await
    }

    pub fn sample(id: &str) -> SampleId {
        SampleId::new(id).expect("Valid test sample id")
    }

    pub fn job(id: &str) -> GrowthJob {
        GrowthJob {
            sample: sample(id),
            model_path: PathBuf::from(format!("{id}.json")),
            tradeoff: 0.5,
            medium: Medium::new(),
        }
    }

    pub fn succeeded(job: &GrowthJob) -> TaskResult {
        TaskResult::Success(SampleGrowth {
            sample: job.sample.clone(),
            growth: vec![GrowthRecord {
                member: "A".to_string(),
                growth_rate: 0.3,
                abundance: Some(1.0),
                sample: job.sample.clone(),
                tradeoff: job.tradeoff,
            }],
            exchanges: FluxTable::new(),
        })
    }
}
