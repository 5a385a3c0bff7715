//! Solver output types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{is_exchange, MEDIUM_MEMBER};

/// Growth of one community member in a solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberGrowth {
    pub member: String,
    pub growth_rate: f64,
    /// Relative abundance; the medium pseudo-member has none
    pub abundance: Option<f64>,
}

impl MemberGrowth {
    pub fn new(member: impl Into<String>, growth_rate: f64, abundance: Option<f64>) -> Self {
        Self {
            member: member.into(),
            growth_rate,
            abundance,
        }
    }

    pub fn is_medium(&self) -> bool {
        self.member == MEDIUM_MEMBER
    }
}

/// Wide flux table: one row per member, one column per reaction.
///
/// Rows may carry different column sets; a missing cell means the reaction
/// does not exist for that member, not a zero flux.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FluxTable {
    rows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl FluxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member: impl Into<String>, reaction: impl Into<String>, flux: f64) {
        self.rows
            .entry(member.into())
            .or_default()
            .insert(reaction.into(), flux);
    }

    pub fn get(&self, member: &str, reaction: &str) -> Option<f64> {
        self.rows.get(member).and_then(|row| row.get(reaction)).copied()
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Union of all column names, sorted
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self
            .rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    /// Keep only exchange-reaction columns. Members left without any column keep an empty row.
    pub fn exchanges_only(mut self) -> Self {
        for row in self.rows.values_mut() {
            row.retain(|reaction, _| is_exchange(reaction));
        }
        self
    }

    /// Iterate populated cells as (member, reaction, flux)
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rows.iter().flat_map(|(member, row)| {
            row.iter()
                .map(move |(reaction, flux)| (member.as_str(), reaction.as_str(), *flux))
        })
    }
}

/// Result of one cooperative-tradeoff optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Community-level growth rate
    pub growth_rate: f64,
    pub members: Vec<MemberGrowth>,
    /// Present only when flux detail was requested
    pub fluxes: Option<FluxTable>,
}

impl Solution {
    /// Growth rates of the real members, keyed by member id
    pub fn member_rates(&self) -> BTreeMap<String, f64> {
        self.members
            .iter()
            .filter(|m| !m.is_medium())
            .map(|m| (m.member.clone(), m.growth_rate))
            .collect()
    }
}
