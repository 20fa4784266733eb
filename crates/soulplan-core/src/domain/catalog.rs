//! Soul-type catalog.
//!
//! Every soul type grants a bonus once two souls of that type are equipped
//! together. Most grant a flat stat bonus in one of three categories; the
//! rest have no stat pair bonus and only matter through set effects.

/// Stat category a soul type boosts when two of that type are equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairBonus {
    /// +15% attack.
    AttackBonus,
    /// +15 crit chance points.
    Crit,
    /// +15% HP.
    HpBonus,
}

/// A catalog entry: soul type name and its pair bonus, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoulType {
    pub name: &'static str,
    pub pair_bonus: Option<PairBonus>,
}

const fn entry(name: &'static str, pair_bonus: Option<PairBonus>) -> SoulType {
    SoulType { name, pair_bonus }
}

/// All known soul types.
pub static SOUL_TYPES: &[SoulType] = &[
    entry("harpy", Some(PairBonus::AttackBonus)),
    entry("watcher", Some(PairBonus::AttackBonus)),
    entry("house imp", Some(PairBonus::AttackBonus)),
    entry("scarlet", Some(PairBonus::AttackBonus)),
    entry("soultaker", Some(PairBonus::AttackBonus)),
    entry("nightwing", Some(PairBonus::AttackBonus)),
    entry("kyoukotsu", Some(PairBonus::AttackBonus)),
    entry("tomb guard", Some(PairBonus::Crit)),
    entry("shadow", Some(PairBonus::Crit)),
    entry("fenikkusu", Some(PairBonus::Crit)),
    entry("claws", Some(PairBonus::Crit)),
    entry("samisen", Some(PairBonus::Crit)),
    entry("seductress", Some(PairBonus::Crit)),
    entry("tree spirit", Some(PairBonus::HpBonus)),
    entry("jizo statue", Some(PairBonus::HpBonus)),
    entry("mirror lady", Some(PairBonus::HpBonus)),
    entry("namazu", None),
    entry("odokuro", None),
    entry("tsuchigumo", None),
    entry("ghostly songstress", None),
];

/// Looks up a soul type by name, ignoring case and surrounding whitespace.
///
/// ```
/// use soulplan_core::{soul_type, PairBonus};
///
/// assert_eq!(soul_type("Seductress").unwrap().pair_bonus, Some(PairBonus::Crit));
/// assert_eq!(soul_type("odokuro").unwrap().pair_bonus, None);
/// assert!(soul_type("unknown").is_none());
/// ```
pub fn soul_type(name: &str) -> Option<&'static SoulType> {
    let name = name.trim();
    SOUL_TYPES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

impl PairBonus {
    /// Pair bonus of the named soul type; `None` for unknown or bonus-less types.
    pub fn of(name: &str) -> Option<PairBonus> {
        soul_type(name).and_then(|t| t.pair_bonus)
    }

    /// Soul types in the catalog carrying this pair bonus.
    pub fn soul_types(self) -> impl Iterator<Item = &'static str> {
        SOUL_TYPES
            .iter()
            .filter(move |t| t.pair_bonus == Some(self))
            .map(|t| t.name)
    }
}
