//! Reference search: every combination, in order, no pruning, one thread.

use soulplan_core::{Candidate, Evaluation, Inventory, Objective, SetRequirement};

/// Best evaluation over the full cross product of `inventory`.
///
/// Candidates failing `requirement` are skipped; a candidate replaces the
/// running best only when strictly better, so the first one found wins ties.
pub fn brute_force_best<'a, F>(
    inventory: &'a Inventory,
    requirement: &SetRequirement,
    objective: Objective,
    score: F,
) -> Evaluation<'a>
where
    F: Fn(Candidate<'a>) -> Evaluation<'a>,
{
    let mut best = Evaluation::zero();
    for s1 in inventory.slot(0) {
        for s2 in inventory.slot(1) {
            for s3 in inventory.slot(2) {
                for s4 in inventory.slot(3) {
                    for s5 in inventory.slot(4) {
                        for s6 in inventory.slot(5) {
                            let candidate = Candidate::new([s1, s2, s3, s4, s5, s6]);
                            if !requirement.is_satisfied_by(&candidate) {
                                continue;
                            }
                            let eval = score(candidate);
                            if eval.improves_on(&best, objective) {
                                best = eval;
                            }
                        }
                    }
                }
            }
        }
    }
    best
}
