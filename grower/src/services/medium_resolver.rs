//! Default medium resolver
//!
//! Entries without a sample id form a global medium handed to every sample.
//! Entries with a sample id only apply to that sample and take precedence
//! over a global entry for the same reaction.

use async_trait::async_trait;
use std::collections::BTreeMap;

use shared::{Medium, SampleId};

use crate::core::medium::MediumEntry;
use crate::error::{GrowError, GrowResult};
use crate::traits::MediumResolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct BroadcastMediumResolver;

impl BroadcastMediumResolver {
    pub fn new() -> Self {
        Self
    }

    fn validate(entry: &MediumEntry) -> GrowResult<()> {
        if entry.reaction.trim().is_empty() {
            return Err(GrowError::InvalidMedium {
                reaction: entry.reaction.clone(),
                reason: "empty reaction id".to_string(),
            });
        }
        if !entry.flux.is_finite() || entry.flux < 0.0 {
            return Err(GrowError::InvalidMedium {
                reaction: entry.reaction.clone(),
                reason: format!("maximum import flux must be a non-negative number, got {}", entry.flux),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MediumResolver for BroadcastMediumResolver {
    async fn resolve(
        &self,
        medium: &[MediumEntry],
        samples: &[SampleId],
    ) -> GrowResult<BTreeMap<SampleId, Medium>> {
        let mut global = Medium::new();
        let mut specific: BTreeMap<&SampleId, Medium> = BTreeMap::new();
        for entry in medium {
            Self::validate(entry)?;
            match &entry.sample_id {
                None => {
                    global.insert(entry.reaction.clone(), entry.flux);
                }
                Some(sample) => {
                    specific
                        .entry(sample)
                        .or_default()
                        .insert(entry.reaction.clone(), entry.flux);
                }
            }
        }

        Ok(samples
            .iter()
            .map(|sample| {
                let mut slice = global.clone();
                if let Some(overrides) = specific.get(sample) {
                    slice.extend(overrides.iter().map(|(reaction, flux)| (reaction.clone(), *flux)));
                }
                (sample.clone(), slice)
            })
            .collect())
    }
}
