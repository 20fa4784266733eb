//! Planning entry point that hides the wiring.

use soulplan_config::{ConfigError, PlannerConfig, TeamConfig};
use soulplan_core::Inventory;
use soulplan_solver::{TeamPlan, TeamPlanner};

/// Planner settings read from the working directory, if present.
pub const CONFIG_FILE: &str = "soulplan.toml";

/// Resolves `team` and plans every member against `inventory`.
///
/// Settings come from [`CONFIG_FILE`]; a missing file means defaults.
/// Claimed souls are removed from `inventory`.
///
/// # Errors
///
/// Fails on a malformed [`CONFIG_FILE`], on unknown names or invalid set
/// requirements in `team`, or if a claimed soul cannot be removed.
pub fn plan_team(team: &TeamConfig, inventory: &mut Inventory) -> Result<TeamPlan, ConfigError> {
    #[cfg(feature = "console")]
    soulplan_console::init();

    let config = PlannerConfig::load_or_default(CONFIG_FILE)?;
    let members = team.resolve()?;

    Ok(TeamPlanner::new(&config).plan(inventory, &members)?)
}
