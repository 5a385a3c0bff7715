//! Data contracts exchanged between the pipeline stages
//!
//! - `solution`: what a model's optimization capability returns
//! - `tables`: the aggregated growth and exchange outputs

pub mod solution;
pub mod tables;

pub use solution::{FluxTable, MemberGrowth, Solution};
pub use tables::{Direction, ExchangeRecord, ExchangeTable, GrowthRecord, GrowthTable};
