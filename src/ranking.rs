use crate::report::TypeStats;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Per-type statistics ordered by cumulative size, largest first.
///
/// Types with equal sizes are ordered by name so the order never depends on
/// how the source map happens to iterate.
///
/// # Examples
///
/// ```
/// # use snapshot_inspect::ranking::RankedStats;
/// # use snapshot_inspect::report::TypeStats;
/// let small = TypeStats::new("small", 1, 100);
/// let large = TypeStats::new("large", 1, 300);
///
/// let mut ranked = RankedStats::default();
/// ranked.insert("small", &small);
/// ranked.insert("large", &large);
///
/// let names: Vec<&str> = ranked.entries().iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, ["large", "small"]);
/// ```
#[derive(Debug, Default)]
pub struct RankedStats<'a> {
    entries: Vec<(&'a str, &'a TypeStats)>,
}

impl<'a> RankedStats<'a> {
    /// Ranks every entry of a report's `Stats` map, keyed by the map key.
    pub fn from_stats(stats: &'a HashMap<String, TypeStats>) -> Self {
        let mut ranked = Self {
            entries: Vec::with_capacity(stats.len()),
        };
        for (name, stat) in stats {
            ranked.insert(name, stat);
        }
        ranked
    }

    /// Inserts an entry at the position that keeps the ranking ordered.
    pub fn insert(&mut self, name: &'a str, stat: &'a TypeStats) {
        let key = (Reverse(stat.sum), name);
        let idx = self
            .entries
            .partition_point(|(n, s)| (Reverse(s.sum), *n) <= key);
        self.entries.insert(idx, (name, stat));
    }

    pub fn entries(&self) -> &[(&'a str, &'a TypeStats)] {
        &self.entries
    }
}
