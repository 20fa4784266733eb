//! Seeded random inventories.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soulplan_core::{Inventory, Soul};

/// Random inventory with `per_slot` souls per slot drawn from `kinds`.
///
/// Stats are small so that ties between candidates are common. The same
/// seed always yields the same inventory.
///
/// # Panics
/// Panics if `kinds` is empty.
pub fn random_inventory(seed: u64, per_slot: usize, kinds: &[&str]) -> Inventory {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Inventory::new(std::array::from_fn(|_| {
        (0..per_slot)
            .map(|_| {
                let kind = kinds[rng.random_range(0..kinds.len())];
                Soul::new(kind)
                    .with_atk(rng.random_range(0..3) * 50)
                    .with_atk_bonus(rng.random_range(0..3) * 5)
                    .with_crit(rng.random_range(0..3) * 4)
                    .with_crit_dmg(rng.random_range(0..2) * 10)
                    .with_spd(rng.random_range(0..3) * 3)
                    .with_hp(rng.random_range(0..2) * 200)
                    .with_hp_bonus(rng.random_range(0..2) * 5)
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_inventory() {
        let a = random_inventory(7, 4, &["shadow", "harpy"]);
        let b = random_inventory(7, 4, &["shadow", "harpy"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 24);
    }
}
