//! Combination search engine.
//!
//! Finds the best six-soul candidate over the full cross product of the
//! inventory's slots, skipping every subtree that can no longer satisfy the
//! set requirement.
//!
//! # Algorithm
//!
//! 1. Each slot-1 soul that leaves the requirement reachable becomes one
//!    work unit.
//! 2. Units enumerate slots 2 to 6 depth-first, in inventory order, keeping
//!    a local best that is only replaced on strict improvement.
//! 3. Units run on a rayon pool sized by [`ThreadCount`] and report through
//!    a channel.
//! 4. Reports are merged in slot-1 order with the same strict rule.
//!
//! Step 4 makes the answer identical to a single-threaded walk over the
//! same inventory, whatever the thread count or completion order.
//!
//! # Example
//!
//! ```
//! use soulplan_core::{Inventory, Objective, SetRequirement, Shikigami, Soul};
//! use soulplan_scoring::StatEvaluator;
//! use soulplan_solver::{CombinationSearch, ThreadCount};
//!
//! let inventory = Inventory::new(std::array::from_fn(|slot| {
//!     vec![Soul::new("shadow").with_atk(100 + slot as i32), Soul::new("harpy").with_atk(500)]
//! }));
//! let evaluator = StatEvaluator::new(Shikigami::lookup("onikiri").unwrap().stats);
//!
//! let outcome = CombinationSearch::new(ThreadCount::Specific(2)).best_set(
//!     &inventory,
//!     &SetRequirement::primary("shadow"),
//!     Objective::Damage,
//!     |candidate| evaluator.evaluate(candidate),
//! );
//!
//! let best = outcome.best.candidate.unwrap();
//! assert!(best.count("shadow") >= 4);
//! assert_eq!(best.count("harpy"), 2);
//! ```

mod prefix;
mod unit;


use std::sync::mpsc;
use std::time::Instant;

use soulplan_config::ThreadCount;
use soulplan_core::{Candidate, Evaluation, Inventory, Objective, SetRequirement};
use tracing::{info, trace, warn};

use crate::statistics::SearchStatistics;
use unit::{UnitReport, WorkUnit};

/// The winning evaluation of one search and how much work it took.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// The best evaluation, or the zero evaluation when nothing qualified.
    pub best: Evaluation<'a>,
    pub statistics: SearchStatistics,
}

impl SearchOutcome<'_> {
    /// True if some candidate satisfied the requirement and the constraints.
    pub fn is_satisfied(&self) -> bool {
        self.best.candidate.is_some()
    }
}

/// Exhaustive, pruned, parallel search for the best candidate.
///
/// The search never mutates the inventory and always runs to exhaustion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationSearch {
    thread_count: ThreadCount,
}

impl CombinationSearch {
    pub fn new(thread_count: ThreadCount) -> Self {
        Self { thread_count }
    }

    pub fn thread_count(&self) -> ThreadCount {
        self.thread_count
    }

    /// Returns the best candidate satisfying `requirement`, ranked by
    /// `objective` over the evaluations produced by `score`.
    ///
    /// `score` sees only candidates that meet the set requirement; it
    /// rejects a candidate by returning the zero evaluation. Ties go to the
    /// candidate found first in slot order.
    pub fn best_set<'a, F>(
        &self,
        inventory: &'a Inventory,
        requirement: &SetRequirement,
        objective: Objective,
        score: F,
    ) -> SearchOutcome<'a>
    where
        F: Fn(Candidate<'a>) -> Evaluation<'a> + Sync,
    {
        let start = Instant::now();
        let mut statistics = SearchStatistics::default();

        let units: Vec<WorkUnit<'a, '_>> = (0..inventory.slot(0).len())
            .map(|index| WorkUnit::new(index, inventory, requirement, objective))
            .filter(|unit| {
                let viable = unit.is_viable();
                if !viable {
                    trace!(event = "unit_pruned", unit = unit.index());
                    statistics.pruned_units += 1;
                }
                viable
            })
            .collect();

        let threads = self.thread_count.resolve(units.len());
        info!(
            event = "search_start",
            combinations = %inventory.combination_count(),
            unit_count = units.len(),
            threads,
            objective = %objective,
        );

        let mut reports: Vec<UnitReport<'a>> = if threads == 1 || units.len() <= 1 {
            units.iter().map(|unit| unit.run(&score)).collect()
        } else {
            run_parallel(&units, threads, &score)
        };
        reports.sort_by_key(|report| report.index);

        let mut best = Evaluation::zero();
        for report in reports {
            statistics += report.statistics;
            if report.best.improves_on(&best, objective) {
                best = report.best;
            }
        }
        statistics.duration = start.elapsed();

        info!(
            event = "search_end",
            value = best.value(objective),
            feasible = best.candidate.is_some(),
            scored = statistics.scored,
            pruned = statistics.pruned,
            duration_ms = statistics.duration.as_millis() as u64,
        );

        SearchOutcome { best, statistics }
    }
}

// Runs every unit as its own rayon task; reports arrive in completion order.
fn run_parallel<'a, F>(
    units: &[WorkUnit<'a, '_>],
    threads: usize,
    score: &F,
) -> Vec<UnitReport<'a>>
where
    F: Fn(Candidate<'a>) -> Evaluation<'a> + Sync,
{
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(err) => {
            warn!(event = "pool_unavailable", error = %err);
            return units.iter().map(|unit| unit.run(score)).collect();
        }
    };

    let (sender, receiver) = mpsc::channel();
    pool.scope(move |scope| {
        for unit in units {
            let sender = sender.clone();
            scope.spawn(move |_| {
                let _ = sender.send(unit.run(score));
            });
        }
    });
    receiver.into_iter().collect()
}
