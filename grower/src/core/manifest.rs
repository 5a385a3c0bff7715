//! Sample manifest: which model file belongs to which sample

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shared::SampleId;

use crate::error::{GrowError, GrowResult};

/// One manifest row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub sample_id: SampleId,
    /// Model file, relative to the model directory
    pub file: PathBuf,
}

/// Rows of (sample, model file), as written by the model-building step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> GrowResult<Self> {
        if entries.is_empty() {
            return Err(GrowError::InvalidManifest {
                reason: "manifest has no rows".to_string(),
            });
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> GrowResult<Self> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Unique samples in order of first appearance
    pub fn samples(&self) -> Vec<SampleId> {
        self.model_files().into_iter().map(|(sample, _)| sample).collect()
    }

    /// Model path per unique sample, resolved against `model_dir`.
    /// A sample listed more than once uses its first file.
    pub fn model_paths(&self, model_dir: &Path) -> Vec<(SampleId, PathBuf)> {
        self.model_files()
            .into_iter()
            .map(|(sample, file)| (sample, model_dir.join(file)))
            .collect()
    }

    fn model_files(&self) -> Vec<(SampleId, &Path)> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| seen.insert(&entry.sample_id))
            .map(|entry| (entry.sample_id.clone(), entry.file.as_path()))
            .collect()
    }
}
