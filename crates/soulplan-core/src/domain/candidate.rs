//! Candidate - one soul per slot.

use smallvec::SmallVec;

use super::{Soul, SLOT_COUNT};

/// A full six-soul set drawn from an [`Inventory`](super::Inventory).
///
/// Candidates borrow their souls from the inventory being searched and are
/// built once per enumerated combination. The per-type counts are computed
/// at construction and never change afterwards.
///
/// # Examples
///
/// ```
/// use soulplan_core::{Candidate, Soul};
///
/// let shadow = Soul::new("shadow");
/// let capitalized = Soul::new("Shadow");
/// let harpy = Soul::new("harpy");
/// let candidate = Candidate::new([&shadow, &shadow, &capitalized, &shadow, &harpy, &harpy]);
///
/// assert_eq!(candidate.count("SHADOW"), 4);
/// assert_eq!(candidate.count("harpy"), 2);
/// assert_eq!(candidate.count("odokuro"), 0);
/// assert!(candidate.has_set("shadow", 4));
/// ```
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    souls: [&'a Soul; SLOT_COUNT],
    counts: SmallVec<[(&'a str, u8); SLOT_COUNT]>,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate from one soul per slot, slot 1 first.
    pub fn new(souls: [&'a Soul; SLOT_COUNT]) -> Self {
        let mut counts: SmallVec<[(&'a str, u8); SLOT_COUNT]> = SmallVec::new();
        for soul in souls {
            match counts.iter_mut().find(|(kind, _)| soul.is_kind(kind)) {
                Some((_, count)) => *count += 1,
                None => counts.push((soul.kind.as_str(), 1)),
            }
        }
        Self { souls, counts }
    }

    /// The six souls, slot 1 first.
    #[inline]
    pub fn souls(&self) -> &[&'a Soul; SLOT_COUNT] {
        &self.souls
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Soul> + '_ {
        self.souls.iter().copied()
    }

    /// Number of souls of the given type, ignoring case.
    #[inline]
    pub fn count(&self, kind: &str) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(kind))
            .map_or(0, |(_, n)| *n as usize)
    }

    /// Distinct soul types with their counts, in order of first appearance.
    pub fn counts(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().map(|(k, n)| (*k, *n as usize))
    }

    /// Returns true if at least `pieces` souls of `kind` are equipped.
    #[inline]
    pub fn has_set(&self, kind: &str, pieces: usize) -> bool {
        self.count(kind) >= pieces
    }

    /// Sums one stat over all six souls.
    #[inline]
    pub fn sum(&self, stat: impl Fn(&Soul) -> i32) -> i32 {
        self.souls.iter().map(|&s| stat(s)).sum()
    }

    /// Owned copy of the six souls, e.g. for [`Inventory::remove`](super::Inventory::remove).
    pub fn to_souls(&self) -> [Soul; SLOT_COUNT] {
        self.souls.map(Soul::clone)
    }
}
