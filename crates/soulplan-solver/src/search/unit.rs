//! One work unit: a fixed slot-1 soul and everything below it.

use soulplan_core::{
    Candidate, Evaluation, Inventory, Objective, SetRequirement, Soul, SLOT_COUNT,
};
use tracing::debug;

use super::prefix::PrefixCounts;
use crate::statistics::SearchStatistics;

/// Sequential enumeration of slots 2 to 6 under one slot-1 soul.
///
/// Holds only shared references; its counters and best live on the stack
/// of [`run`](Self::run).
#[derive(Debug)]
pub(crate) struct WorkUnit<'a, 'r> {
    index: usize,
    first: &'a Soul,
    counts: PrefixCounts,
    inventory: &'a Inventory,
    requirement: &'r SetRequirement,
    objective: Objective,
}

/// What a finished unit sends back to the engine.
#[derive(Debug)]
pub(crate) struct UnitReport<'a> {
    /// Position of the unit's slot-1 soul, used to order the merge.
    pub index: usize,
    pub best: Evaluation<'a>,
    pub statistics: SearchStatistics,
}

// Mutable state of one depth-first walk.
struct Walk<'a> {
    chosen: [&'a Soul; SLOT_COUNT],
    best: Evaluation<'a>,
    statistics: SearchStatistics,
}

impl<'a, 'r> WorkUnit<'a, 'r> {
    pub(crate) fn new(
        index: usize,
        inventory: &'a Inventory,
        requirement: &'r SetRequirement,
        objective: Objective,
    ) -> Self {
        let first = &inventory.slot(0)[index];
        Self {
            index,
            first,
            counts: PrefixCounts::default().push(requirement, first),
            inventory,
            requirement,
            objective,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Whether the slot-1 soul alone leaves the requirement reachable.
    pub(crate) fn is_viable(&self) -> bool {
        self.counts.is_viable(self.requirement)
    }

    /// Enumerates every completion of this unit's prefix and keeps the best.
    pub(crate) fn run<F>(&self, score: &F) -> UnitReport<'a>
    where
        F: Fn(Candidate<'a>) -> Evaluation<'a>,
    {
        let mut walk = Walk {
            chosen: [self.first; SLOT_COUNT],
            best: Evaluation::zero(),
            statistics: SearchStatistics {
                units: 1,
                ..SearchStatistics::default()
            },
        };
        self.descend(1, self.counts, &mut walk, score);

        debug!(
            event = "unit_end",
            unit = self.index,
            scored = walk.statistics.scored,
            pruned = walk.statistics.pruned,
            value = walk.best.value(self.objective),
        );

        UnitReport {
            index: self.index,
            best: walk.best,
            statistics: walk.statistics,
        }
    }

    fn descend<F>(&self, slot: usize, counts: PrefixCounts, walk: &mut Walk<'a>, score: &F)
    where
        F: Fn(Candidate<'a>) -> Evaluation<'a>,
    {
        if slot == SLOT_COUNT {
            self.leaf(walk, score);
            return;
        }

        for soul in self.inventory.slot(slot) {
            walk.statistics.prefixes += 1;
            let next = counts.push(self.requirement, soul);
            if !next.is_viable(self.requirement) {
                walk.statistics.pruned += 1;
                continue;
            }
            walk.chosen[slot] = soul;
            self.descend(slot + 1, next, walk, score);
        }
    }

    fn leaf<F>(&self, walk: &mut Walk<'a>, score: &F)
    where
        F: Fn(Candidate<'a>) -> Evaluation<'a>,
    {
        let candidate = Candidate::new(walk.chosen);
        // Prefix counts lump secondaries together; each type needs its own pair.
        if !self.requirement.is_satisfied_by(&candidate) {
            walk.statistics.rejected += 1;
            return;
        }

        walk.statistics.scored += 1;
        let eval = score(candidate);
        if eval.improves_on(&walk.best, self.objective) {
            walk.best = eval;
        }
    }
}
