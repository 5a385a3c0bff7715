//! Test fixtures: a scripted community model and the loader serving it

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use grower::{CommunityModel, Manifest, ManifestEntry, MediumEntry, ModelLoadError, ModelLoader};
use shared::{FluxTable, Medium, MemberGrowth, OptimizationError, SampleId, Solution};

/// Constant test data
pub struct TestFixtures;

impl TestFixtures {
    pub const GLUCOSE: &'static str = "EX_glc_m";
    pub const OXYGEN: &'static str = "EX_o2_m";
    pub const AMMONIUM: &'static str = "EX_nh4_m";
    pub const MODEL_DIR: &'static str = "models";

    pub fn sample(id: &str) -> SampleId {
        SampleId::new(id).unwrap()
    }

    /// One row per sample, model file named after the sample
    pub fn manifest(samples: &[&str]) -> Manifest {
        Manifest::new(
            samples
                .iter()
                .map(|id| ManifestEntry {
                    sample_id: Self::sample(id),
                    file: PathBuf::from(format!("{id}.json")),
                })
                .collect(),
        )
        .unwrap()
    }

    /// Glucose and oxygen available to every sample
    pub fn medium() -> Vec<MediumEntry> {
        vec![
            MediumEntry::global(Self::GLUCOSE, 10.0),
            MediumEntry::global(Self::OXYGEN, 20.0),
        ]
    }
}

/// How a scripted community behaves
#[derive(Debug, Clone)]
pub struct CommunityScript {
    pub exchanges: Vec<String>,
    /// (member, growth rate, abundance)
    pub members: Vec<(String, f64, f64)>,
    pub qp_capable: bool,
    pub fail_tradeoff: bool,
    pub fail_minimal_medium: bool,
}

impl CommunityScript {
    /// Two members, three exchanges, everything succeeds
    pub fn healthy() -> Self {
        Self {
            exchanges: vec![
                TestFixtures::GLUCOSE.to_string(),
                TestFixtures::OXYGEN.to_string(),
                TestFixtures::AMMONIUM.to_string(),
            ],
            members: vec![
                ("Ecoli".to_string(), 0.6, 0.7),
                ("Bsub".to_string(), 0.3, 0.3),
            ],
            qp_capable: true,
            fail_tradeoff: false,
            fail_minimal_medium: false,
        }
    }

    pub fn failing_tradeoff() -> Self {
        Self {
            fail_tradeoff: true,
            ..Self::healthy()
        }
    }

    pub fn failing_minimal_medium() -> Self {
        Self {
            fail_minimal_medium: true,
            ..Self::healthy()
        }
    }

    pub fn without_qp() -> Self {
        Self {
            qp_capable: false,
            ..Self::healthy()
        }
    }

    pub fn with_exchanges(mut self, exchanges: &[&str]) -> Self {
        self.exchanges = exchanges.iter().map(|e| e.to_string()).collect();
        self
    }

    fn community_growth(&self) -> f64 {
        self.members
            .iter()
            .map(|(_, rate, abundance)| rate * abundance)
            .sum()
    }
}

/// Community model driven by a [`CommunityScript`]
pub struct FakeCommunity {
    id: String,
    script: CommunityScript,
    medium: Medium,
    media: Arc<Mutex<Vec<Medium>>>,
}

impl CommunityModel for FakeCommunity {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn exchanges(&self) -> Vec<String> {
        self.script.exchanges.clone()
    }

    fn medium(&self) -> Medium {
        self.medium.clone()
    }

    fn set_medium(&mut self, medium: Medium) {
        self.media.lock().unwrap().push(medium.clone());
        self.medium = medium;
    }

    fn supports_quadratic_programming(&self) -> bool {
        self.script.qp_capable
    }

    fn cooperative_tradeoff(&mut self, fraction: f64, fluxes: bool) -> Result<Solution, OptimizationError> {
        if self.script.fail_tradeoff {
            return Err(OptimizationError::Infeasible {
                status: "infeasible".to_string(),
            });
        }

        let mut members: Vec<MemberGrowth> = self
            .script
            .members
            .iter()
            .map(|(member, rate, abundance)| MemberGrowth::new(member, rate * fraction, Some(*abundance)))
            .collect();
        members.push(MemberGrowth::new("medium", 0.0, None));

        let fluxes = fluxes.then(|| {
            let mut table = FluxTable::new();
            for (index, (member, _, _)) in self.script.members.iter().enumerate() {
                let uptake = -1.0 - index as f64;
                for reaction in self.medium.keys() {
                    table.insert(member, reaction, uptake);
                }
                table.insert(member, "EX_ac_m", 0.5);
                table.insert(member, "PGI", 4.2);
            }
            for (reaction, bound) in &self.medium {
                table.insert("medium", reaction, *bound);
            }
            table
        });

        Ok(Solution {
            growth_rate: self.script.community_growth() * fraction,
            members,
            fluxes,
        })
    }

    fn minimal_medium(
        &mut self,
        _community_growth: f64,
        _member_growth: &BTreeMap<String, f64>,
    ) -> Result<Medium, OptimizationError> {
        if self.script.fail_minimal_medium {
            return Err(OptimizationError::Numerical {
                message: "unbounded".to_string(),
            });
        }

        // Keeps the first supplied import and reports the rest as unused.
        Ok(self
            .medium
            .iter()
            .enumerate()
            .map(|(index, (reaction, flux))| (reaction.clone(), if index == 0 { flux / 2.0 } else { 0.0 }))
            .collect())
    }
}

/// Serves scripted communities keyed by model file stem
#[derive(Default)]
pub struct FakeLoader {
    scripts: HashMap<String, CommunityScript>,
    media: HashMap<String, Arc<Mutex<Vec<Medium>>>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, sample: &str, script: CommunityScript) -> Self {
        self.scripts.insert(sample.to_string(), script);
        self.media.insert(sample.to_string(), Arc::default());
        self
    }

    /// Every medium set on the model for `sample`, in call order
    pub fn media_set(&self, sample: &str) -> Vec<Medium> {
        self.media
            .get(sample)
            .map(|media| media.lock().unwrap().clone())
            .unwrap_or_default()
    }
}

impl ModelLoader for FakeLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn CommunityModel>, ModelLoadError> {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        match (self.scripts.get(&stem), self.media.get(&stem)) {
            (Some(script), Some(media)) => Ok(Box::new(FakeCommunity {
                id: stem,
                script: script.clone(),
                medium: Medium::new(),
                media: Arc::clone(media),
            })),
            _ => Err(ModelLoadError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such model"),
            }),
        }
    }
}
