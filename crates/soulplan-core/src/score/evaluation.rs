//! Evaluation - the scored stats of one candidate.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::domain::{Candidate, Soul, SLOT_COUNT};

use super::Objective;

/// Stats computed for one candidate.
///
/// Damage, HP and heal are truncated toward zero so that values compare
/// exactly across runs. The zero evaluation (`Evaluation::default()`, no
/// candidate) stands for "filtered out"; a search replaces its best only on
/// strict improvement, so a zero evaluation is never chosen over a scoring one.
///
/// # Examples
///
/// ```
/// use soulplan_core::{Evaluation, Objective};
///
/// let zero = Evaluation::zero();
/// assert!(zero.is_zero());
///
/// let better = Evaluation { damage: 10, ..Evaluation::zero() };
/// assert!(better.improves_on(&zero, Objective::Damage));
/// assert!(!zero.improves_on(&better, Objective::Damage));
/// assert!(!better.improves_on(&better, Objective::Damage));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluation<'a> {
    pub damage: i64,
    pub heal: i64,
    pub hp: i64,
    /// Effective crit chance, 0..=100.
    pub crit: i32,
    pub speed: i32,
    pub candidate: Option<Candidate<'a>>,
}

impl<'a> Evaluation<'a> {
    /// The "no valid result" evaluation.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True for the "no valid result" evaluation.
    pub fn is_zero(&self) -> bool {
        self.candidate.is_none()
            && self.damage == 0
            && self.heal == 0
            && self.hp == 0
            && self.crit == 0
            && self.speed == 0
    }

    /// Value of the stat selected by `objective`.
    #[inline]
    pub fn value(&self, objective: Objective) -> i64 {
        match objective {
            Objective::Damage => self.damage,
            Objective::Hp => self.hp,
            Objective::Heal => self.heal,
        }
    }

    /// Strictly better than `other` for `objective`; ties are not improvements.
    #[inline]
    pub fn improves_on(&self, other: &Evaluation<'_>, objective: Objective) -> bool {
        self.value(objective) > other.value(objective)
    }

    /// Owned copy that outlives the inventory borrow, or `None` for the zero evaluation.
    pub fn to_loadout(&self) -> Option<Loadout> {
        let candidate = self.candidate.as_ref()?;
        Some(Loadout {
            damage: self.damage,
            heal: self.heal,
            hp: self.hp,
            crit: self.crit,
            speed: self.speed,
            souls: candidate.to_souls(),
        })
    }
}

/// An owned winning set with its stats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Loadout {
    pub damage: i64,
    pub heal: i64,
    pub hp: i64,
    pub crit: i32,
    pub speed: i32,
    pub souls: [Soul; SLOT_COUNT],
}

impl Loadout {
    /// Value of the stat selected by `objective`.
    pub fn value(&self, objective: Objective) -> i64 {
        match objective {
            Objective::Damage => self.damage,
            Objective::Hp => self.hp,
            Objective::Heal => self.heal,
        }
    }
}
