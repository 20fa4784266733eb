//! Six-slot soul inventory.

use crate::error::{PlanError, Result};

use super::{Soul, SLOT_COUNT};

/// Souls available for each of the six slots.
///
/// Slot membership is fixed: a soul listed for slot 3 is never considered
/// for any other slot. The inventory is read-only during a search and is
/// only mutated by [`Inventory::remove`] once a set has been committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    slots: [Vec<Soul>; SLOT_COUNT],
}

impl Inventory {
    /// Creates an inventory from six slot lists, slot 1 first.
    pub fn new(slots: [Vec<Soul>; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Souls available for slot `index` (zero-based).
    ///
    /// # Panics
    /// Panics if `index >= SLOT_COUNT`.
    pub fn slot(&self, index: usize) -> &[Soul] {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[Vec<Soul>; SLOT_COUNT] {
        &self.slots
    }

    pub fn into_slots(self) -> [Vec<Soul>; SLOT_COUNT] {
        self.slots
    }

    /// Total number of souls across all slots.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Size of the full cross product of the six slots.
    pub fn combination_count(&self) -> u128 {
        self.slots.iter().map(|s| s.len() as u128).product()
    }

    /// Removes one soul per slot equal to the matching entry of `souls`.
    ///
    /// Any equal entry may be taken; souls with identical fields are
    /// interchangeable. Removal is all-or-nothing: every slot is checked
    /// before anything is removed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingSoul`] naming the first (one-based) slot
    /// with no matching soul. The inventory is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use soulplan_core::{Inventory, Soul};
    ///
    /// let slot = |atk| vec![Soul::new("shadow").with_atk(atk), Soul::new("harpy")];
    /// let mut inventory = Inventory::new([slot(1), slot(2), slot(3), slot(4), slot(5), slot(6)]);
    ///
    /// let chosen: [Soul; 6] = std::array::from_fn(|i| Soul::new("shadow").with_atk(i as i32 + 1));
    /// inventory.remove(&chosen).unwrap();
    /// assert_eq!(inventory.len(), 6);
    ///
    /// // Already removed: nothing matches any more.
    /// assert!(inventory.remove(&chosen).is_err());
    /// assert_eq!(inventory.len(), 6);
    /// ```
    pub fn remove(&mut self, souls: &[Soul; SLOT_COUNT]) -> Result<()> {
        let mut positions = [0usize; SLOT_COUNT];
        for (index, soul) in souls.iter().enumerate() {
            positions[index] = self.slots[index]
                .iter()
                .position(|s| s == soul)
                .ok_or_else(|| PlanError::MissingSoul {
                    slot: index + 1,
                    kind: soul.kind.clone(),
                })?;
        }

        for (slot, position) in self.slots.iter_mut().zip(positions) {
            slot.swap_remove(position);
        }
        Ok(())
    }
}

impl From<[Vec<Soul>; SLOT_COUNT]> for Inventory {
    fn from(slots: [Vec<Soul>; SLOT_COUNT]) -> Self {
        Self::new(slots)
    }
}
