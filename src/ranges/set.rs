use itertools::Itertools;

use super::range::Range;

/// Sorted set of disjoint, non-adjacent ranges.
///
/// For any two consecutive ranges `a` and `b`, `b.start > a.end + 1`, so every id
/// is covered by at most one range and the set is the minimal representation of
/// the union of the ranges it was built from.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Sorts the ranges by start and coalesces the ones that overlap or touch.
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range>) -> Self {
        let mut sorted: Vec<Range> = ranges.into_iter().collect();
        sorted.sort_unstable_by_key(|range| range.start);

        let mut merged: Vec<Range> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }
        debug_assert!(merged
            .iter()
            .tuple_windows()
            .all(|(cur, next)| next.start > cur.end.saturating_add(1)));
        Self { ranges: merged }
    }

    /// Whether `id` lies in one of the ranges.
    pub fn is_fresh(&self, id: i64) -> bool {
        // Index of the first range starting after `id`; only its predecessor can contain `id`
        let idx = self.ranges.partition_point(|range| range.start <= id);
        idx > 0 && self.ranges[idx - 1].contains(id)
    }

    /// Number of distinct ids covered by the set.
    pub fn total_covered(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0u64, |total, range| total.saturating_add(range.len()))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }
}

impl FromIterator<Range> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl std::fmt::Display for RangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.ranges.iter().join(", "))
    }
}
