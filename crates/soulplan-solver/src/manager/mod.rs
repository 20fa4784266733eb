//! Team planning: one search per member, in order, claiming souls as it goes.
//!
//! # Overview
//!
//! The manager module provides:
//! - [`TeamPlanner`]: runs [`CombinationSearch`] for each member and removes
//!   the winning souls before the next member is searched
//! - [`Assignment`]: one member's outcome, satisfied or not
//! - [`TeamPlan`]: every assignment of a team, in member order

use soulplan_config::PlannerConfig;
use soulplan_core::{Inventory, Loadout, Member, Objective, PlanError};
use soulplan_scoring::StatEvaluator;
use tracing::info;

use crate::search::CombinationSearch;
use crate::statistics::SearchStatistics;

#[cfg(test)]
mod mod_tests;

/// The outcome of planning one member.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Resolved shikigami name.
    pub member: String,
    pub objective: Objective,
    /// The claimed souls and their stats, or `None` if nothing qualified.
    pub loadout: Option<Loadout>,
    pub statistics: SearchStatistics,
}

impl Assignment {
    pub fn is_satisfied(&self) -> bool {
        self.loadout.is_some()
    }

    /// Value of the member's objective, zero when unsatisfied.
    pub fn value(&self) -> i64 {
        self.loadout
            .as_ref()
            .map_or(0, |loadout| loadout.value(self.objective))
    }
}

/// Assignments for a whole team, in planning order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamPlan {
    pub assignments: Vec<Assignment>,
}

impl TeamPlan {
    /// True if every member got a set.
    pub fn is_complete(&self) -> bool {
        self.assignments.iter().all(Assignment::is_satisfied)
    }

    pub fn unsatisfied(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| !a.is_satisfied())
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Plans members one after another against a shared inventory.
///
/// Each member's search sees the inventory left by all earlier members.
/// Removal happens between searches, never during one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamPlanner {
    search: CombinationSearch,
    ignore_crit: bool,
}

impl TeamPlanner {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            search: CombinationSearch::new(config.thread_count),
            ignore_crit: config.ignore_crit,
        }
    }

    pub fn with_search(mut self, search: CombinationSearch) -> Self {
        self.search = search;
        self
    }

    pub fn search(&self) -> &CombinationSearch {
        &self.search
    }

    /// Scorer for `member`, with the planner-wide crit switch applied.
    pub fn evaluator(&self, member: &Member) -> StatEvaluator {
        let mut options = member.options;
        options.ignore_crit |= self.ignore_crit;

        StatEvaluator::new(member.shikigami)
            .with_modifiers(member.modifiers)
            .with_options(options)
            .with_constraints(member.constraints.clone())
            .with_objective(member.objective)
    }

    /// Finds the best set for `member` and removes it from `inventory`.
    ///
    /// An unsatisfied member leaves the inventory untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingSoul`] if the winning souls cannot be
    /// removed, which means the inventory changed under the search.
    pub fn plan_member(
        &self,
        inventory: &mut Inventory,
        member: &Member,
    ) -> Result<Assignment, PlanError> {
        info!(
            event = "member_start",
            member = %member.name,
            objective = %member.objective,
        );

        let evaluator = self.evaluator(member);
        let (loadout, statistics) = {
            let outcome = self.search.best_set(
                inventory,
                &member.requirement,
                member.objective,
                |candidate| evaluator.evaluate(candidate),
            );
            (outcome.best.to_loadout(), outcome.statistics)
        };

        if let Some(loadout) = &loadout {
            inventory.remove(&loadout.souls)?;
        }

        let assignment = Assignment {
            member: member.name.clone(),
            objective: member.objective,
            loadout,
            statistics,
        };
        info!(
            event = "member_end",
            member = %assignment.member,
            feasible = assignment.is_satisfied(),
            value = assignment.value(),
            remaining = inventory.len(),
        );
        Ok(assignment)
    }

    /// Plans every member in order.
    ///
    /// Unsatisfied members do not stop the plan; later members still get
    /// their search.
    pub fn plan(&self, inventory: &mut Inventory, members: &[Member]) -> Result<TeamPlan, PlanError> {
        let mut plan = TeamPlan::default();
        for member in members {
            plan.assignments.push(self.plan_member(inventory, member)?);
        }

        info!(
            event = "plan_end",
            member_count = plan.len(),
            unsatisfied = plan.unsatisfied().count(),
        );
        Ok(plan)
    }
}
