//! Shikigami base stats and name lookup.

use crate::error::{PlanError, Result};

use super::normalize_name;

/// Base stats of a shikigami, before souls.
///
/// Percentages are stored as whole numbers (`crit: 11` is 11%,
/// `crit_dmg: 160` is 160%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shikigami {
    pub hp: i32,
    pub atk: i32,
    pub spd: i32,
    pub crit: i32,
    pub crit_dmg: i32,
    /// Attacks in several hits, which lets periodic-hit souls trigger extra damage.
    pub multi_hit: bool,
}

/// A named catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShikigamiEntry {
    pub name: &'static str,
    pub stats: Shikigami,
}

/// Known shikigami, keyed by canonical lowercase name.
pub static SHIKIGAMI: &[ShikigamiEntry] = &[
    ShikigamiEntry {
        name: "onikiri",
        stats: Shikigami {
            hp: 10254,
            atk: 3350,
            spd: 117,
            crit: 11,
            crit_dmg: 160,
            multi_hit: false,
        },
    },
    ShikigamiEntry {
        name: "ibaraki doji",
        stats: Shikigami {
            hp: 10937,
            atk: 3216,
            spd: 112,
            crit: 10,
            crit_dmg: 150,
            multi_hit: false,
        },
    },
    ShikigamiEntry {
        name: "ubume",
        stats: Shikigami {
            hp: 10026,
            atk: 3082,
            spd: 113,
            crit: 10,
            crit_dmg: 150,
            multi_hit: false,
        },
    },
    ShikigamiEntry {
        name: "kamikui",
        stats: Shikigami {
            hp: 11621,
            atk: 1741,
            spd: 118,
            crit: 8,
            crit_dmg: 150,
            multi_hit: false,
        },
    },
    ShikigamiEntry {
        name: "shuten doji",
        stats: Shikigami {
            hp: 11963,
            atk: 3136,
            spd: 113,
            crit: 10,
            crit_dmg: 150,
            multi_hit: true,
        },
    },
    ShikigamiEntry {
        name: "momo no sei",
        stats: Shikigami {
            hp: 11165,
            atk: 2117,
            spd: 110,
            crit: 3,
            crit_dmg: 150,
            multi_hit: false,
        },
    },
    ShikigamiEntry {
        name: "yamausagi",
        stats: Shikigami {
            hp: 10709,
            atk: 2278,
            spd: 119,
            crit: 3,
            crit_dmg: 150,
            multi_hit: false,
        },
    },
];

/// Nicknames, mapped to canonical catalog names.
pub static SHIKIGAMI_ALIASES: &[(&str, &str)] = &[
    ("iba", "ibaraki doji"),
    ("ibaraki", "ibaraki doji"),
    ("shuten", "shuten doji"),
    ("momo", "momo no sei"),
    ("peach", "momo no sei"),
    ("usagi", "yamausagi"),
    ("rabbit", "yamausagi"),
];

impl Shikigami {
    /// Looks up a shikigami by canonical name or alias, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownShikigami`] when the name matches neither
    /// the catalog nor the alias table. Prefixes are not matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use soulplan_core::Shikigami;
    ///
    /// let iba = Shikigami::lookup("iba").unwrap();
    /// assert_eq!(iba.name, "ibaraki doji");
    /// assert_eq!(iba.stats.atk, 3216);
    ///
    /// assert!(Shikigami::lookup("ibara").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static ShikigamiEntry> {
        let key = normalize_name(name);
        let canonical = SHIKIGAMI_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map_or(key.as_str(), |(_, canonical)| *canonical);

        SHIKIGAMI
            .iter()
            .find(|entry| entry.name == canonical)
            .ok_or_else(|| PlanError::UnknownShikigami(name.to_string()))
    }
}
