//! External stat adjustments applied on top of shikigami and soul stats.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named flat adjustments from buffs, debuffs or other team members.
///
/// Zero means no adjustment. Percentages are whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Modifiers {
    /// Flat attack added to the shikigami's base attack.
    pub atk: i32,
    /// Attack bonus, in percent.
    pub atk_bonus: i32,
    /// Crit chance, in percentage points.
    pub crit: i32,
    /// Crit damage, in percent.
    pub crit_dmg: i32,
    /// HP bonus, in percent.
    pub hp_bonus: i32,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Situational switches for the stat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StatOptions {
    /// Treat crit as worthless, e.g. against enemies that negate crits.
    pub ignore_crit: bool,
    /// Apply four-piece set effects. Off models fights where they never trigger.
    pub set_effects: bool,
    /// A support buff granting flat crit chance is active.
    pub crit_buff: bool,
    /// Resource count (e.g. orbs held) feeding resource-scaled set effects.
    pub resource_count: u32,
}

impl Default for StatOptions {
    fn default() -> Self {
        Self {
            ignore_crit: false,
            set_effects: true,
            crit_buff: false,
            resource_count: 0,
        }
    }
}
