//! Objective - the stat a search maximizes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The scalar metric used to rank candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Objective {
    #[default]
    Damage,
    Hp,
    Heal,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Damage => write!(f, "damage"),
            Objective::Hp => write!(f, "hp"),
            Objective::Heal => write!(f, "heal"),
        }
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "damage" | "dmg" => Ok(Objective::Damage),
            "hp" => Ok(Objective::Hp),
            "heal" | "healing" => Ok(Objective::Heal),
            other => Err(format!("Unknown objective {}", other)),
        }
    }
}
