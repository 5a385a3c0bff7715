//! Tests for the JSON model loader

use std::fs;

use shared::OptimizationError;

use crate::error::ModelLoadError;
use crate::services::{JsonModelLoader, StoredModel};
use crate::traits::{CommunityModel, ModelLoader};

fn write_model(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_stored_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(
        &dir,
        "S1.json",
        r#"{
            "id": "S1",
            "exchanges": ["EX_glc_m", "EX_o2_m"],
            "supports_quadratic_programming": true,
            "medium": {"EX_glc_m": 10.0}
        }"#,
    );

    let mut model = JsonModelLoader::new().load(&path).unwrap();

    assert_eq!(model.id(), "S1");
    assert_eq!(model.exchanges(), vec!["EX_glc_m", "EX_o2_m"]);
    assert!(model.supports_quadratic_programming());
    assert_eq!(model.medium()["EX_glc_m"], 10.0);

    model.set_medium(Default::default());
    assert!(model.medium().is_empty());
}

#[test]
fn test_stored_model_cannot_optimize() {
    let mut model = StoredModel {
        id: "S1".to_string(),
        exchanges: vec![],
        supports_quadratic_programming: true,
        medium: Default::default(),
    };

    assert_eq!(model.cooperative_tradeoff(0.5, false), Err(OptimizationError::SolverUnavailable));
    assert_eq!(
        model.minimal_medium(0.1, &Default::default()),
        Err(OptimizationError::SolverUnavailable)
    );
}

#[test]
fn test_capability_defaults_to_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "S2.json", r#"{"id": "S2", "exchanges": ["EX_glc_m"]}"#);

    let model = JsonModelLoader::read(&path).unwrap();
    assert!(!model.supports_quadratic_programming);
    assert!(model.medium.is_empty());
}

#[test]
fn test_missing_and_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = JsonModelLoader::new().load(&dir.path().join("nope.json"));
    assert!(matches!(missing, Err(ModelLoadError::Io { .. })));

    let corrupt = write_model(&dir, "bad.json", "{not json");
    assert!(matches!(JsonModelLoader::new().load(&corrupt), Err(ModelLoadError::Parse { .. })));
}
