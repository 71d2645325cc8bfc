//! Page table statistics tracking.

use std::fmt;

/// Usage counters tracked by the page table.
///
/// Counters are monotonically non-decreasing and reset only when the
/// table is rebuilt. Every lookup is either a hit or a miss, so
/// `hits + misses == lookups` always holds.
///
/// # Example
/// ```
/// use hashpt::{FrameNumber, HashPageTable, VirtualAddress};
///
/// let mut table = HashPageTable::new(8, 4096).unwrap();
/// table.add_page_entry(VirtualAddress::new(0), FrameNumber::new(100)).unwrap();
/// table.lookup_page(VirtualAddress::new(0));
///
/// let stats = table.statistics_snapshot();
/// assert_eq!(stats.lookups, 1);
/// assert_eq!(stats.hit_rate(), Some(1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Number of calls to `lookup_page`.
    pub lookups: u64,

    /// Lookups that found a mapping.
    pub hits: u64,

    /// Lookups that ended in a page fault.
    pub misses: u64,

    /// New entries appended to an already non-empty bucket.
    pub collisions: u64,
}

impl StatsSnapshot {
    /// Create a snapshot with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit rate (0.0 to 1.0), or `None` before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.lookups == 0 {
            None
        } else {
            Some(self.hits as f64 / self.lookups as f64)
        }
    }

    #[inline]
    pub(crate) fn record_lookup(&mut self) {
        self.lookups += 1;
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    #[inline]
    pub(crate) fn record_collision(&mut self) {
        self.collisions += 1;
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ lookups: {}, hits: {}, misses: {}, collisions: {}",
            self.lookups, self.hits, self.misses, self.collisions
        )?;
        match self.hit_rate() {
            Some(rate) => write!(f, ", hit_rate: {:.2}% }}", rate * 100.0),
            None => write!(f, " }}"),
        }
    }
}

/// How full the table is. Derived from the buckets, not counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupancy {
    /// Total entries across all buckets.
    pub entries: usize,

    /// Buckets holding at least one entry.
    pub non_empty_buckets: usize,

    /// Length of the longest chain.
    pub longest_chain: usize,

    /// `entries / table_size`.
    pub load_factor: f64,
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occupancy {{ entries: {}, non_empty_buckets: {}, longest_chain: {}, load_factor: {:.2} }}",
            self.entries, self.non_empty_buckets, self.longest_chain, self.load_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = StatsSnapshot::new();
        assert_eq!(stats.lookups, 0);
        assert_eq!(stats.collisions, 0);
        assert_eq!(stats.hit_rate(), None);
    }

    #[test]
    fn test_stats_hit_rate() {
        let mut stats = StatsSnapshot::new();
        for _ in 0..7 {
            stats.record_lookup();
            stats.record_hit();
        }
        for _ in 0..3 {
            stats.record_lookup();
            stats.record_miss();
        }

        assert_eq!(stats.hit_rate(), Some(0.7));
        assert_eq!(stats.hits + stats.misses, stats.lookups);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = StatsSnapshot::new();
        for _ in 0..80 {
            stats.record_lookup();
            stats.record_hit();
        }
        for _ in 0..20 {
            stats.record_lookup();
            stats.record_miss();
        }
        stats.record_collision();

        let display = format!("{}", stats);
        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("collisions: 1"));
        assert!(display.contains("80.00%"));
    }

    #[test]
    fn test_stats_display_without_lookups_omits_rate() {
        let display = format!("{}", StatsSnapshot::new());
        assert!(!display.contains("hit_rate"));
    }
}
