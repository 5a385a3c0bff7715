//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Prefix carried by every exchange reaction identifier
pub const EXCHANGE_PREFIX: &str = "EX_";

/// Member identifier of the synthetic medium compartment in solver output
pub const MEDIUM_MEMBER: &str = "medium";

/// Maximum import flux per exchange reaction
pub type Medium = BTreeMap<String, f64>;

/// Identifier of one sample (and therefore one community model) in a batch
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleId(String);

impl SampleId {
    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SharedError::InvalidSampleId { input: id });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SampleId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SampleId> for String {
    fn from(id: SampleId) -> Self {
        id.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one batch run, used to correlate log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a reaction identifier names an exchange reaction
pub fn is_exchange(reaction: &str) -> bool {
    reaction.starts_with(EXCHANGE_PREFIX)
}

/// Metabolite name of an exchange reaction (the identifier without its prefix)
pub fn metabolite_of(reaction: &str) -> &str {
    reaction.strip_prefix(EXCHANGE_PREFIX).unwrap_or(reaction)
}
