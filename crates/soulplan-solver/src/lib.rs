//! soulplan Solver Engine
//!
//! This crate provides:
//! - [`CombinationSearch`]: exhaustive, pruned search over the six slots,
//!   fanned out with one work unit per slot-1 soul
//! - [`SearchStatistics`]: per-search counters, summed from the work units
//! - [`TeamPlanner`]: sequential search-then-remove over a team
//!
//! Logging follows three levels: INFO for search and member lifecycle,
//! DEBUG for each finished work unit, TRACE for slot-1 souls pruned before
//! any work is scheduled.

pub mod manager;
pub mod search;
pub mod statistics;

pub use manager::{Assignment, TeamPlan, TeamPlanner};
pub use search::{CombinationSearch, SearchOutcome};
pub use soulplan_config::ThreadCount;
pub use statistics::SearchStatistics;
