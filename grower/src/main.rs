//! Main entry point for the grower binary
//!
//! Checks a batch before it is handed to a solver-backed runner: every model
//! in the manifest is loaded from its stored header, checked for QP support
//! and matched against the medium.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use grower::services::inputs::{read_manifest, read_medium, write_json};
use grower::services::{BroadcastMediumResolver, JsonModelLoader, TracingDiagnostics};
use grower::{GrowConfig, Grower};
use shared::{logging, sample_info, sample_warn, RunId};

/// Preflight check for community growth batches
#[derive(Parser)]
#[command(name = "grower")]
#[command(about = "Checks community models and medium for a growth simulation batch")]
pub struct Args {
    /// Manifest JSON with `sample_id` and `file` per row
    #[arg(long, env = "GROWER_MANIFEST")]
    pub manifest: PathBuf,

    /// Medium JSON with `reaction`, `flux` and optional `sample_id` per row
    #[arg(long, env = "GROWER_MEDIUM")]
    pub medium: PathBuf,

    /// Directory containing the model files named in the manifest
    #[arg(long, env = "GROWER_MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Fraction of maximal community growth to enforce
    #[arg(long, env = "GROWER_TRADEOFF", default_value = "0.5")]
    pub tradeoff: f64,

    /// Number of parallel workers
    #[arg(long, env = "GROWER_THREADS", default_value = "1")]
    pub threads: usize,

    /// Output directory for preflight.json
    #[arg(long, env = "GROWER_OUTPUT", default_value = "./output")]
    pub output: PathBuf,

    /// Log level (trace, debug, info, warn, error); defaults to info
    #[arg(long, env = "GROWER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    match args.log_level.as_deref() {
        Some(level) => logging::init_tracing_with_level(Some(level)),
        None => logging::init_tracing(),
    }

    let run_id = RunId::new();
    logging::log_startup(&run_id, "grower preflight");

    let config = GrowConfig::new(&args.model_dir)
        .with_tradeoff(args.tradeoff)
        .with_threads(args.threads);

    let manifest = read_manifest(&args.manifest).await?;
    let medium = read_medium(&args.medium).await?;

    let grower = Grower::new(
        config,
        JsonModelLoader::new(),
        BroadcastMediumResolver::new(),
        TracingDiagnostics::new(),
    )?;
    let reports = grower.preflight(&manifest, &medium).await?;

    for report in &reports {
        match &report.error {
            None if report.qp_capable => {
                sample_info!(report.sample, "{} import reactions found in model", report.coverage());
            }
            Some(error) => sample_warn!(report.sample, "⚠️ Not usable: {}", error),
            _ => sample_warn!(report.sample, "⚠️ Model was not built with a QP-capable solver"),
        }
    }

    let output = args.output.join("preflight.json");
    write_json(&output, &reports)
        .await
        .with_context(|| format!("writing {}", output.display()))?;

    let usable = reports.iter().filter(|report| report.is_usable()).count();
    if usable == 0 {
        logging::log_error(&run_id, "Preflight", &"no sample is usable");
        anyhow::bail!("none of the {} samples can be grown", reports.len());
    }

    logging::log_success(
        &run_id,
        &format!("{usable} of {} samples ready, report at {}", reports.len(), output.display()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_falls_back_to_default_subscriber() {
        let args = Args::try_parse_from([
            "grower",
            "--manifest",
            "manifest.json",
            "--medium",
            "medium.json",
            "--model-dir",
            "models",
        ])
        .unwrap();

        assert_eq!(args.log_level, None);
        assert_eq!(args.threads, 1);
        assert_eq!(args.tradeoff, 0.5);
    }

    #[test]
    fn test_explicit_log_level() {
        let args = Args::try_parse_from([
            "grower",
            "--manifest",
            "manifest.json",
            "--medium",
            "medium.json",
            "--model-dir",
            "models",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
