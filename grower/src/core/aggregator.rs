//! Result aggregation
//!
//! Merges per-sample task results into one growth table and one long-form
//! exchange table. Output rows are sorted by (sample, member, reaction), so
//! the tables do not depend on the order in which tasks finished.

use std::collections::{BTreeMap, BTreeSet};

use shared::{
    metabolite_of, Direction, ExchangeRecord, ExchangeTable, GrowthRecord, GrowthTable, SampleId, MEDIUM_MEMBER,
};

use crate::core::task::TaskResult;
use crate::error::{GrowError, GrowResult};

/// The two aggregated outputs of a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthResults {
    pub growth_rates: GrowthTable,
    pub exchanges: ExchangeTable,
}

/// Long-form exchange row before the abundance merge
#[derive(Debug, Clone, PartialEq)]
struct ExchangeFlux {
    member: String,
    sample: SampleId,
    reaction: String,
    flux: f64,
}

/// Merge task results into the final tables.
///
/// Fails with [`GrowError::BatchExhaustion`] when no task succeeded.
pub fn aggregate(results: &[TaskResult]) -> GrowResult<GrowthResults> {
    let successes: Vec<_> = results.iter().filter_map(TaskResult::success).collect();
    if successes.is_empty() {
        return Err(GrowError::BatchExhaustion {
            attempted: results.len(),
        });
    }

    let mut growth: Vec<GrowthRecord> = successes
        .iter()
        .flat_map(|sample| sample.growth.iter())
        .filter(|row| row.member != MEDIUM_MEMBER)
        .cloned()
        .collect();
    growth.sort_by(|a, b| (&a.sample, &a.member).cmp(&(&b.sample, &b.member)));

    let long: Vec<ExchangeFlux> = successes
        .iter()
        .flat_map(|sample| {
            sample.exchanges.cells().map(move |(member, reaction, flux)| ExchangeFlux {
                member: member.to_string(),
                sample: sample.sample.clone(),
                reaction: reaction.to_string(),
                flux,
            })
        })
        .collect();

    let exchanges = merge_abundance(long, &growth);

    Ok(GrowthResults {
        growth_rates: GrowthTable { rows: growth },
        exchanges,
    })
}

/// Outer merge of exchange fluxes with member abundances on (member, sample).
///
/// Exchange rows without a growth row keep a missing abundance. Growth rows
/// without any exchange flux appear once with no reaction.
fn merge_abundance(long: Vec<ExchangeFlux>, growth: &[GrowthRecord]) -> ExchangeTable {
    let mut abundance: BTreeMap<(&SampleId, &str), Option<f64>> = BTreeMap::new();
    for row in growth {
        abundance
            .entry((&row.sample, row.member.as_str()))
            .or_insert(row.abundance);
    }

    let mut matched: BTreeSet<(SampleId, String)> = BTreeSet::new();
    let mut rows: Vec<ExchangeRecord> = Vec::with_capacity(long.len());
    for flux in long {
        let member_abundance = abundance
            .get(&(&flux.sample, flux.member.as_str()))
            .copied()
            .flatten();
        matched.insert((flux.sample.clone(), flux.member.clone()));
        rows.push(ExchangeRecord {
            metabolite: Some(metabolite_of(&flux.reaction).to_string()),
            direction: Direction::of(Some(flux.flux)),
            member: flux.member,
            sample: flux.sample,
            reaction: Some(flux.reaction),
            flux: Some(flux.flux),
            abundance: member_abundance,
        });
    }

    for ((sample, member), member_abundance) in abundance {
        if matched.contains(&(sample.clone(), member.to_string())) {
            continue;
        }
        rows.push(ExchangeRecord {
            member: member.to_string(),
            sample: sample.clone(),
            reaction: None,
            flux: None,
            abundance: member_abundance,
            metabolite: None,
            direction: Direction::of(None),
        });
    }

    rows.sort_by(|a, b| (&a.sample, &a.member, &a.reaction).cmp(&(&b.sample, &b.member, &b.reaction)));
    ExchangeTable { rows }
}
