//! Primary and secondary set requirements.
//!
//! A member may ask for a four-piece primary set and two-piece secondary
//! sets. At most one secondary type can accompany a primary (4 + 2 slots),
//! and up to three secondary types may be requested without one (2 + 2 + 2).

use crate::domain::{normalize_name, Candidate, Soul, SLOT_COUNT};
use crate::error::{PlanError, Result};

/// Souls of the primary types a candidate must hold.
pub const PRIMARY_PIECES: usize = 4;

/// Souls of each secondary type a candidate must hold.
pub const SECONDARY_PIECES: usize = 2;

/// Which requirement list a soul type counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Primary,
    Secondary,
    Neither,
}

/// Validated type-count requirements for one search.
///
/// - with primaries: at least [`PRIMARY_PIECES`] souls whose type is any primary
/// - every listed secondary type: at least [`SECONDARY_PIECES`] souls of that type
///
/// # Examples
///
/// ```
/// use soulplan_core::SetRequirement;
///
/// let req = SetRequirement::new(["Seductress"], ["odokuro"]).unwrap();
/// assert!(req.is_primary("seductress"));
/// assert_eq!(req.secondary_target(), 2);
///
/// // A primary leaves room for only one pair.
/// assert!(SetRequirement::new(["seductress"], ["odokuro", "shadow"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetRequirement {
    primaries: Vec<String>,
    secondaries: Vec<String>,
}

impl SetRequirement {
    /// Maximum secondary types alongside a primary set.
    pub const MAX_SECONDARIES_WITH_PRIMARY: usize = 1;

    /// Maximum secondary types without a primary set.
    pub const MAX_SECONDARIES: usize = 3;

    /// Creates a requirement from type names. Names are normalized and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequirement`] when there are too many
    /// secondary types or a type is listed as both primary and secondary.
    pub fn new<P, S>(primaries: P, secondaries: S) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let primaries = normalized_unique(primaries);
        let secondaries = normalized_unique(secondaries);

        let limit = if primaries.is_empty() {
            Self::MAX_SECONDARIES
        } else {
            Self::MAX_SECONDARIES_WITH_PRIMARY
        };
        if secondaries.len() > limit {
            return Err(PlanError::InvalidRequirement(format!(
                "{} secondary soul types requested, at most {} allowed{}",
                secondaries.len(),
                limit,
                if primaries.is_empty() { "" } else { " with a primary" },
            )));
        }
        if let Some(both) = secondaries.iter().find(|s| primaries.contains(s)) {
            return Err(PlanError::InvalidRequirement(format!(
                "{} is listed as both primary and secondary",
                both
            )));
        }

        Ok(Self {
            primaries,
            secondaries,
        })
    }

    /// No type requirement at all: every combination qualifies.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Convenience for a single primary type with no secondaries.
    pub fn primary(kind: &str) -> Self {
        Self {
            primaries: vec![normalize_name(kind)],
            secondaries: Vec::new(),
        }
    }

    pub fn primaries(&self) -> &[String] {
        &self.primaries
    }

    pub fn secondaries(&self) -> &[String] {
        &self.secondaries
    }

    pub fn is_unrestricted(&self) -> bool {
        self.primaries.is_empty() && self.secondaries.is_empty()
    }

    pub fn is_primary(&self, kind: &str) -> bool {
        self.primaries.iter().any(|p| p.eq_ignore_ascii_case(kind))
    }

    pub fn is_secondary(&self, kind: &str) -> bool {
        self.secondaries.iter().any(|s| s.eq_ignore_ascii_case(kind))
    }

    #[inline]
    pub fn membership(&self, soul: &Soul) -> Membership {
        if self.is_primary(&soul.kind) {
            Membership::Primary
        } else if self.is_secondary(&soul.kind) {
            Membership::Secondary
        } else {
            Membership::Neither
        }
    }

    /// Primary-matching souls a full candidate needs.
    #[inline]
    pub fn primary_target(&self) -> usize {
        if self.primaries.is_empty() {
            0
        } else {
            PRIMARY_PIECES
        }
    }

    /// Secondary-matching souls a full candidate needs, across all secondary types.
    #[inline]
    pub fn secondary_target(&self) -> usize {
        SECONDARY_PIECES * self.secondaries.len()
    }

    /// Whether a prefix of `placed` souls holding `primary` and `secondary`
    /// matches can still be completed to a qualifying candidate.
    ///
    /// ```
    /// use soulplan_core::SetRequirement;
    ///
    /// let req = SetRequirement::new(["shadow"], ["odokuro"]).unwrap();
    /// assert!(req.is_reachable(2, 0, 2));
    /// assert!(!req.is_reachable(1, 0, 2));
    /// assert!(!req.is_reachable(4, 0, 5));
    /// ```
    #[inline]
    pub fn is_reachable(&self, primary: usize, secondary: usize, placed: usize) -> bool {
        let missing = self.primary_target().saturating_sub(primary)
            + self.secondary_target().saturating_sub(secondary);
        missing <= SLOT_COUNT - placed
    }

    /// Exact check on a full candidate.
    pub fn is_satisfied_by(&self, candidate: &Candidate<'_>) -> bool {
        let primary: usize = candidate
            .counts()
            .filter(|(kind, _)| self.is_primary(kind))
            .map(|(_, n)| n)
            .sum();
        primary >= self.primary_target()
            && self
                .secondaries
                .iter()
                .all(|s| candidate.count(s) >= SECONDARY_PIECES)
    }
}

fn normalized_unique<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = normalize_name(name.as_ref());
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_of<'a>(souls: &'a [Soul]) -> Candidate<'a> {
        Candidate::new(std::array::from_fn(|i| &souls[i]))
    }

    #[test]
    fn test_secondary_limits() {
        assert!(SetRequirement::new(Vec::<&str>::new(), ["a", "b", "c"]).is_ok());
        assert!(SetRequirement::new(Vec::<&str>::new(), ["a", "b", "c", "d"]).is_err());
        assert!(SetRequirement::new(["p"], ["a"]).is_ok());
        assert!(SetRequirement::new(["p", "q"], ["a"]).is_ok());
        assert!(SetRequirement::new(["p"], ["a", "b"]).is_err());
    }

    #[test]
    fn test_overlap_rejected() {
        let err = SetRequirement::new(["Shadow"], ["shadow"]).unwrap_err();
        assert!(err.to_string().contains("both primary and secondary"));
    }

    #[test]
    fn test_names_deduplicated() {
        let req = SetRequirement::new(["Shadow", "shadow ", ""], Vec::<&str>::new()).unwrap();
        assert_eq!(req.primaries(), ["shadow"]);
        assert!(!req.is_unrestricted());
        assert!(SetRequirement::unrestricted().is_unrestricted());
    }

    #[test]
    fn test_reachability() {
        let primary_only = SetRequirement::primary("shadow");
        assert!(primary_only.is_reachable(0, 0, 2));
        assert!(!primary_only.is_reachable(0, 0, 3));
        assert!(primary_only.is_reachable(4, 0, 6));

        let pairs = SetRequirement::new(Vec::<&str>::new(), ["a", "b", "c"]).unwrap();
        assert!(pairs.is_reachable(0, 0, 0));
        assert!(!pairs.is_reachable(0, 0, 1));
        assert!(pairs.is_reachable(0, 1, 1));

        let open = SetRequirement::unrestricted();
        assert!(open.is_reachable(0, 0, 6));
    }

    #[test]
    fn test_exact_leaf_check() {
        let req = SetRequirement::new(Vec::<&str>::new(), ["a", "b"]).unwrap();

        let three_and_one: Vec<Soul> = ["a", "a", "a", "b", "x", "x"].iter().map(Soul::new).collect();
        assert!(!req.is_satisfied_by(&candidate_of(&three_and_one)));

        let two_and_two: Vec<Soul> = ["a", "a", "b", "b", "x", "x"].iter().map(Soul::new).collect();
        assert!(req.is_satisfied_by(&candidate_of(&two_and_two)));
    }

    #[test]
    fn test_multiple_primaries_count_together() {
        let req = SetRequirement::new(["shadow", "harpy"], Vec::<&str>::new()).unwrap();
        let mixed: Vec<Soul> = ["shadow", "shadow", "harpy", "harpy", "x", "x"]
            .iter()
            .map(Soul::new)
            .collect();
        assert!(req.is_satisfied_by(&candidate_of(&mixed)));

        let short: Vec<Soul> = ["shadow", "shadow", "harpy", "x", "x", "x"]
            .iter()
            .map(Soul::new)
            .collect();
        assert!(!req.is_satisfied_by(&candidate_of(&short)));
    }
}
