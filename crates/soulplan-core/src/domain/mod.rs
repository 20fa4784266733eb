//! Domain model for soul-set planning
//!
//! - `Soul`: one equippable item with a type and stat contributions
//! - `Inventory`: six independent slot lists of souls
//! - `Candidate`: one soul per slot plus its memoized type counts
//! - `Shikigami`: base stats of the character being equipped
//! - `SoulType`: catalog entry mapping a soul type to its pair bonus

mod candidate;
mod catalog;
mod inventory;
mod shikigami;
mod soul;


pub use candidate::Candidate;
pub use catalog::{soul_type, PairBonus, SoulType, SOUL_TYPES};
pub use inventory::Inventory;
pub use shikigami::{Shikigami, ShikigamiEntry, SHIKIGAMI, SHIKIGAMI_ALIASES};
pub use soul::Soul;

/// Number of equip slots; every candidate holds exactly one soul per slot.
pub const SLOT_COUNT: usize = 6;

/// Normalizes a catalog name for lookups: trimmed and lowercased.
///
/// ```
/// use soulplan_core::normalize_name;
///
/// assert_eq!(normalize_name("  Ibaraki Doji "), "ibaraki doji");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
