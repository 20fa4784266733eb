//! Shikigami and inventory builders.

use soulplan_core::{Candidate, Inventory, Shikigami, Soul, SLOT_COUNT};

/// A damage dealer with Atk 3350, Crit 11%, CritDmg 160%, Spd 117, HP 10000.
pub fn striker() -> Shikigami {
    Shikigami {
        hp: 10000,
        atk: 3350,
        spd: 117,
        crit: 11,
        crit_dmg: 160,
        multi_hit: false,
    }
}

/// Inventory with `per_slot` souls of one type in every slot.
///
/// Souls are made distinct through their speed (`slot * 10 + i`).
pub fn uniform_inventory(kind: &str, per_slot: usize) -> Inventory {
    Inventory::new(std::array::from_fn(|slot| {
        (0..per_slot)
            .map(|i| Soul::new(kind).with_spd((slot * 10 + i) as i32))
            .collect()
    }))
}

/// Inventory from six slot lists given as slices.
pub fn inventory_of(slots: [&[Soul]; SLOT_COUNT]) -> Inventory {
    Inventory::new(slots.map(<[Soul]>::to_vec))
}

/// Candidate over the first six souls of `souls`.
///
/// # Panics
/// Panics if fewer than six souls are given.
pub fn candidate_of(souls: &[Soul]) -> Candidate<'_> {
    Candidate::new(std::array::from_fn(|i| &souls[i]))
}
