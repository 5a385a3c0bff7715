//! Shared types for the community growth pipeline
//!
//! Contains the identifiers, solver output contracts, aggregated table rows
//! and logging helpers used by every crate in the workspace.

pub mod contracts;
pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;

pub use contracts::{
    // Solver output
    FluxTable, MemberGrowth, Solution,

    // Aggregated tables
    Direction, ExchangeRecord, ExchangeTable, GrowthRecord, GrowthTable,
};
