//! Batch growth workflow
//!
//! Resolves the medium for every sample in a manifest, runs one growth task
//! per sample on the worker pool and aggregates whatever succeeded.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use shared::{logging, Medium, RunId, SampleId};

use crate::config::GrowConfig;
use crate::core::aggregator::{aggregate, GrowthResults};
use crate::core::manifest::Manifest;
use crate::core::medium::MediumEntry;
use crate::core::preflight::{inspect_sample, PreflightReport};
use crate::core::task::{run_growth_task, GrowthJob, TaskResult};
use crate::error::{GrowError, GrowResult};
use crate::services::ParallelRunner;
use crate::traits::{Diagnostics, MediumResolver, ModelLoader};

/// Runs growth batches with injected collaborators
pub struct Grower<L, R, D>
where
    L: ModelLoader + 'static,
    R: MediumResolver,
    D: Diagnostics + 'static,
{
    config: GrowConfig,

    /// Injected services
    loader: Arc<L>,
    resolver: R,
    diagnostics: Arc<D>,
}

impl<L, R, D> Grower<L, R, D>
where
    L: ModelLoader + 'static,
    R: MediumResolver,
    D: Diagnostics + 'static,
{
    /// Create a grower; fails if the configuration is out of range
    pub fn new(config: GrowConfig, loader: L, resolver: R, diagnostics: D) -> GrowResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            loader: Arc::new(loader),
            resolver,
            diagnostics: Arc::new(diagnostics),
        })
    }

    pub fn config(&self) -> &GrowConfig {
        &self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Simulate growth for every sample in the manifest.
    ///
    /// Failed samples are dropped from the tables. Only a batch in which
    /// every sample failed is an error.
    pub async fn grow(&self, manifest: &Manifest, medium: &[MediumEntry]) -> GrowResult<GrowthResults> {
        let run_id = RunId::new();
        let jobs = self.jobs(manifest, medium).await?;
        logging::log_startup(
            &run_id,
            &format!(
                "growth simulation for {} samples (tradeoff {}, {} workers)",
                jobs.len(),
                self.config.tradeoff,
                self.config.threads
            ),
        );

        let results = self.run_jobs(jobs).await?;
        let failed = results.iter().filter(|result| result.is_failure()).count();
        logging::log_progress(
            &run_id,
            "Growth tasks settled",
            &format!("{} succeeded, {} failed", results.len() - failed, failed),
        );

        match aggregate(&results) {
            Ok(tables) => {
                logging::log_success(
                    &run_id,
                    &format!(
                        "Aggregated {} growth rows and {} exchange rows",
                        tables.growth_rates.len(),
                        tables.exchanges.len()
                    ),
                );
                Ok(tables)
            }
            Err(error) => {
                logging::log_error(&run_id, "Growth simulation", &error);
                Err(error)
            }
        }
    }

    /// Check every sample's model and medium without optimizing
    pub async fn preflight(&self, manifest: &Manifest, medium: &[MediumEntry]) -> GrowResult<Vec<PreflightReport>> {
        let jobs = self.jobs(manifest, medium).await?;
        let loader = Arc::clone(&self.loader);

        tokio::task::spawn_blocking(move || {
            jobs.iter()
                .map(|job| inspect_sample(job, loader.as_ref()))
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|join_error| GrowError::config("preflight", join_error))
    }

    async fn run_jobs(&self, jobs: Vec<GrowthJob>) -> GrowResult<Vec<TaskResult>> {
        let runner = ParallelRunner::new(self.config.threads, self.diagnostics.clone())?;
        let loader = Arc::clone(&self.loader);
        let diagnostics = Arc::clone(&self.diagnostics);

        Ok(runner
            .run(jobs, move |job| {
                run_growth_task(&job, loader.as_ref(), diagnostics.as_ref())
            })
            .await)
    }

    async fn jobs(&self, manifest: &Manifest, medium: &[MediumEntry]) -> GrowResult<Vec<GrowthJob>> {
        let paths: Vec<(SampleId, PathBuf)> = manifest.model_paths(&self.config.model_dir);
        let samples: Vec<SampleId> = paths.iter().map(|(sample, _)| sample.clone()).collect();
        let mut media: BTreeMap<SampleId, Medium> = self.resolver.resolve(medium, &samples).await?;

        Ok(paths
            .into_iter()
            .map(|(sample, model_path)| GrowthJob {
                medium: media.remove(&sample).unwrap_or_default(),
                sample,
                model_path,
                tradeoff: self.config.tradeoff,
            })
            .collect())
    }
}
