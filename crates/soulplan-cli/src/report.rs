//! Plain-text rendering of assignments.

use std::fmt::Write;

use anyhow::Result;
use soulplan::Assignment;

/// One header line with the member's stats, followed by the six souls as YAML.
pub fn render(assignment: &Assignment) -> Result<String> {
    let mut out = String::new();
    match &assignment.loadout {
        Some(loadout) => {
            writeln!(
                out,
                "{}: damage {} | hp {} | heal {} | crit {} | speed {}",
                assignment.member,
                loadout.damage,
                loadout.hp,
                loadout.heal,
                loadout.crit,
                loadout.speed
            )?;
            out.push_str(&serde_yaml::to_string(&loadout.souls)?);
        }
        None => writeln!(out, "{}: no satisfying souls", assignment.member)?,
    }
    Ok(out)
}
