//! Bounded parallel execution of growth tasks
//!
//! Each task runs on the blocking pool since the solver call blocks. A
//! semaphore with one permit per worker bounds how many models are resident
//! at once. Tasks never see each other; a failed or panicking task only
//! affects its own sample.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;

use shared::{sample_debug, SampleId};

use crate::core::task::{GrowthJob, TaskResult};
use crate::error::{GrowError, GrowResult};
use crate::traits::{DiagnosticEvent, Diagnostics};

pub struct ParallelRunner {
    workers: usize,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ParallelRunner {
    pub fn new(workers: usize, diagnostics: Arc<dyn Diagnostics>) -> GrowResult<Self> {
        if workers == 0 {
            return Err(GrowError::config("threads", workers));
        }
        Ok(Self { workers, diagnostics })
    }

    /// Run `task` once per job with at most `workers` running at a time.
    ///
    /// Returns one result per job. Results are in job order, but callers
    /// should key on the sample each result carries.
    pub async fn run<F>(&self, jobs: Vec<GrowthJob>, task: F) -> Vec<TaskResult>
    where
        F: Fn(GrowthJob) -> TaskResult + Send + Sync + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let task = Arc::new(task);

        let mut samples: Vec<SampleId> = Vec::with_capacity(jobs.len());
        let mut handles = Vec::with_capacity(jobs.len());
        for job in jobs {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .expect("worker semaphore is never closed");
            let task = Arc::clone(&task);

            sample_debug!(job.sample, "🧫 Dispatching growth task");
            samples.push(job.sample.clone());
            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                task(job)
            }));
        }

        join_all(handles)
            .await
            .into_iter()
            .zip(samples)
            .map(|(joined, sample)| match joined {
                Ok(result) => result,
                Err(join_error) => {
                    self.diagnostics.report(DiagnosticEvent::TaskPanicked {
                        sample: sample.clone(),
                        message: join_error.to_string(),
                    });
                    TaskResult::Failure { sample }
                }
            })
            .collect()
    }
}
