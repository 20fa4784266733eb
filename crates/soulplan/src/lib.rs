//! soulplan - Onmyoji soul set planner
//!
//! Picks one soul per slot for each team member so that damage, HP or
//! healing is maximized under speed and crit constraints and set
//! requirements, then claims those souls before planning the next member.
//!
//! # Example
//!
//! ```rust
//! use soulplan::prelude::*;
//!
//! let team = TeamConfig::from_yaml_str("- { name: onikiri, primary: shadow }").unwrap();
//! let mut inventory = Inventory::new(std::array::from_fn(|slot| {
//!     vec![Soul::new("shadow").with_atk(50 * slot as i32), Soul::new("harpy").with_atk(400)]
//! }));
//!
//! let plan = soulplan::plan_team(&team, &mut inventory).unwrap();
//! assert!(plan.is_complete());
//! assert_eq!(inventory.len(), 6);
//! ```

mod planner;
pub use planner::{plan_team, CONFIG_FILE};

pub use soulplan_config::{
    parse_constraint_arg, ConfigError, MemberConfig, NameList, PlannerConfig, SoulDb, TeamConfig,
    ThreadCount,
};
pub use soulplan_core::{
    Attribute, Candidate, Constraints, Evaluation, Inventory, Loadout, Member, Modifiers,
    Objective, PlanError, RangeConstraint, SetRequirement, Shikigami, Soul, StatOptions,
};
pub use soulplan_scoring::StatEvaluator;
pub use soulplan_solver::{
    Assignment, CombinationSearch, SearchOutcome, SearchStatistics, TeamPlan, TeamPlanner,
};

#[cfg(feature = "console")]
pub use soulplan_console as console;

pub mod prelude {
    pub use super::{
        Inventory, Loadout, Member, Objective, SetRequirement, Shikigami, Soul, SoulDb,
        TeamConfig, TeamPlan, TeamPlanner,
    };
    pub use super::{Attribute, Constraints, RangeConstraint};
    pub use super::{CombinationSearch, StatEvaluator};
}
