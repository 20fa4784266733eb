//! Member - one fully resolved team member.

use crate::constraint::Constraints;
use crate::domain::Shikigami;
use crate::modifiers::{Modifiers, StatOptions};
use crate::requirement::SetRequirement;
use crate::score::Objective;

/// A team member whose names have already been resolved and validated.
///
/// Built by the configuration layer (or directly in code) and consumed by
/// the team planner, one member at a time.
///
/// # Examples
///
/// ```
/// use soulplan_core::{Member, Objective, SetRequirement, Shikigami};
///
/// let onikiri = Shikigami::lookup("onikiri").unwrap();
/// let member = Member::new(onikiri.name, onikiri.stats, SetRequirement::primary("shadow"))
///     .with_objective(Objective::Damage);
///
/// assert_eq!(member.name, "onikiri");
/// assert!(member.constraints.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub shikigami: Shikigami,
    pub requirement: SetRequirement,
    pub constraints: Constraints,
    pub objective: Objective,
    pub modifiers: Modifiers,
    pub options: StatOptions,
}

impl Member {
    pub fn new(name: impl Into<String>, shikigami: Shikigami, requirement: SetRequirement) -> Self {
        Self {
            name: name.into(),
            shikigami,
            requirement,
            constraints: Constraints::default(),
            objective: Objective::default(),
            modifiers: Modifiers::default(),
            options: StatOptions::default(),
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_options(mut self, options: StatOptions) -> Self {
        self.options = options;
        self
    }
}
