//! Running type counters for a partial candidate.

use soulplan_core::{Membership, SetRequirement, Soul};

/// Souls placed so far and how many of them match the requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PrefixCounts {
    placed: usize,
    primary: usize,
    secondary: usize,
}

impl PrefixCounts {
    /// Counts after appending `soul` to the prefix.
    #[inline]
    pub(crate) fn push(self, requirement: &SetRequirement, soul: &Soul) -> Self {
        let mut next = self;
        next.placed += 1;
        match requirement.membership(soul) {
            Membership::Primary => next.primary += 1,
            Membership::Secondary => next.secondary += 1,
            Membership::Neither => {}
        }
        next
    }

    /// False once the remaining slots cannot make up the missing matches.
    #[inline]
    pub(crate) fn is_viable(&self, requirement: &SetRequirement) -> bool {
        requirement.is_reachable(self.primary, self.secondary, self.placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_prune_point() {
        let req = SetRequirement::primary("shadow");
        let shadow = Soul::new("shadow");
        let other = Soul::new("harpy");

        let mut counts = PrefixCounts::default();
        counts = counts.push(&req, &other);
        assert!(counts.is_viable(&req));
        counts = counts.push(&req, &other);
        assert!(counts.is_viable(&req));
        assert!(!counts.push(&req, &other).is_viable(&req));
        assert!(counts.push(&req, &shadow).is_viable(&req));
    }

    #[test]
    fn test_secondary_counts() {
        let req = SetRequirement::new(["shadow"], ["odokuro"]).unwrap();
        let counts = [Soul::new("shadow"), Soul::new("shadow"), Soul::new("odokuro")]
            .iter()
            .fold(PrefixCounts::default(), |c, s| c.push(&req, s));

        assert_eq!(counts.primary, 2);
        assert_eq!(counts.secondary, 1);
        assert!(counts.is_viable(&req));
        assert!(!counts.push(&req, &Soul::new("harpy")).is_viable(&req));
    }

    #[test]
    fn test_unrestricted_never_prunes() {
        let req = SetRequirement::unrestricted();
        let soul = Soul::new("harpy");
        let counts = (0..6).fold(PrefixCounts::default(), |c, _| c.push(&req, &soul));
        assert!(counts.is_viable(&req));
    }
}
