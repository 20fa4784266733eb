//! Search statistics collection.
//!
//! Each work unit owns its counters; the engine sums them after the merge,
//! so no counter is ever shared between threads.

use std::ops::AddAssign;
use std::time::Duration;

/// Counters for one combination search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Slot-1 souls turned into work units.
    pub units: u64,
    /// Slot-1 souls dropped before scheduling.
    pub pruned_units: u64,
    /// Partial prefixes considered below slot 1.
    pub prefixes: u64,
    /// Prefixes whose subtree was skipped.
    pub pruned: u64,
    /// Full candidates failing the exact set requirement check.
    pub rejected: u64,
    /// Full candidates handed to the scoring callback.
    pub scored: u64,
    /// Wall time of the whole search.
    pub duration: Duration,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of considered prefixes that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.prefixes == 0 {
            0.0
        } else {
            self.pruned as f64 / self.prefixes as f64
        }
    }

    /// Scored candidates per second.
    pub fn scored_per_sec(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.scored as f64 / secs) as u64
        } else {
            0
        }
    }
}

impl AddAssign for SearchStatistics {
    fn add_assign(&mut self, other: Self) {
        self.units += other.units;
        self.pruned_units += other.pruned_units;
        self.prefixes += other.prefixes;
        self.pruned += other.pruned;
        self.rejected += other.rejected;
        self.scored += other.scored;
        self.duration += other.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let mut total = SearchStatistics {
            units: 1,
            prefixes: 10,
            pruned: 4,
            scored: 3,
            ..SearchStatistics::new()
        };
        total += SearchStatistics {
            units: 1,
            prefixes: 6,
            scored: 5,
            rejected: 1,
            ..SearchStatistics::new()
        };

        assert_eq!(total.units, 2);
        assert_eq!(total.prefixes, 16);
        assert_eq!(total.scored, 8);
        assert_eq!(total.rejected, 1);
        assert!((total.prune_rate() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_rates_without_work() {
        let stats = SearchStatistics::new();
        assert_eq!(stats.prune_rate(), 0.0);
        assert_eq!(stats.scored_per_sec(), 0);
    }

    #[test]
    fn test_speed() {
        let stats = SearchStatistics {
            scored: 5000,
            duration: Duration::from_millis(500),
            ..SearchStatistics::new()
        };
        assert_eq!(stats.scored_per_sec(), 10_000);
    }
}
