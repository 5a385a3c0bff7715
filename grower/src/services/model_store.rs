//! JSON model headers
//!
//! The model builder writes a JSON header next to each solver artifact. It
//! records the community's exchanges, its default medium and whether the
//! solver it was built with handles quadratic objectives. A header has no
//! solver attached, so it can be inspected but not optimized.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use shared::{Medium, OptimizationError, Solution};

use crate::error::ModelLoadError;
use crate::traits::{CommunityModel, ModelLoader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredModel {
    pub id: String,
    pub exchanges: Vec<String>,
    #[serde(default)]
    pub supports_quadratic_programming: bool,
    #[serde(default)]
    pub medium: Medium,
}

impl CommunityModel for StoredModel {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn exchanges(&self) -> Vec<String> {
        self.exchanges.clone()
    }

    fn medium(&self) -> Medium {
        self.medium.clone()
    }

    fn set_medium(&mut self, medium: Medium) {
        self.medium = medium;
    }

    fn supports_quadratic_programming(&self) -> bool {
        self.supports_quadratic_programming
    }

    fn cooperative_tradeoff(&mut self, _fraction: f64, _fluxes: bool) -> Result<Solution, OptimizationError> {
        Err(OptimizationError::SolverUnavailable)
    }

    fn minimal_medium(
        &mut self,
        _community_growth: f64,
        _member_growth: &BTreeMap<String, f64>,
    ) -> Result<Medium, OptimizationError> {
        Err(OptimizationError::SolverUnavailable)
    }
}

/// Loads [`StoredModel`] headers from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelLoader;

impl JsonModelLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(path: &Path) -> Result<StoredModel, ModelLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ModelLoader for JsonModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn CommunityModel>, ModelLoadError> {
        let model = Self::read(path)?;
        Ok(Box::new(model))
    }
}
