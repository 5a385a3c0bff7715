//! Reading batch inputs and writing reports
//!
//! Manifest and medium are JSON arrays of rows. Reports are written as
//! pretty-printed JSON.

use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::core::manifest::Manifest;
use crate::core::medium::MediumEntry;
use crate::error::{GrowError, GrowResult};

async fn read_file(path: &Path) -> GrowResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| GrowError::FileSystemError {
            operation: "read".to_string(),
            path: path.to_path_buf(),
            source,
        })
}

/// Read a manifest of `{sample_id, file}` rows
pub async fn read_manifest(path: &Path) -> GrowResult<Manifest> {
    let content = read_file(path).await?;
    Manifest::from_json_str(&content)
}

/// Read medium rows of `{reaction, flux, sample_id?}`
pub async fn read_medium(path: &Path) -> GrowResult<Vec<MediumEntry>> {
    let content = read_file(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `value` as pretty JSON, creating parent directories as needed
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> GrowResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| GrowError::FileSystemError {
                    operation: "create directory".to_string(),
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .await
        .map_err(|source| GrowError::FileSystemError {
            operation: "write".to_string(),
            path: path.to_path_buf(),
            source,
        })
}
