use tracing::debug;

use super::range::{CountingSortRangeOptimized, min_max};
use crate::Sorter;

/// Ranges wider than this many times the input length go to the comparison sort.
pub const HYBRID_RANGE_FACTOR: i64 = 10;

/// Picks a comparison sort when a counting table would dwarf the input,
/// and the range-optimized counting sort otherwise.
pub struct HybridSort;

impl HybridSort {
    /// Whether `data` is routed to the comparison sort.
    pub fn prefers_comparison(data: &[i32]) -> bool {
        if data.is_empty() {
            return false;
        }
        let (min, max) = min_max(data);
        let range = max as i64 - min as i64;
        range > HYBRID_RANGE_FACTOR * data.len() as i64
    }
}

impl Sorter for HybridSort {
    fn sort(&self, data: &mut [i32]) {
        if Self::prefers_comparison(data) {
            debug!(len = data.len(), "hybrid sort: comparison sort");
            data.sort_unstable();
            return;
        }
        debug!(len = data.len(), "hybrid sort: range-optimized counting sort");
        CountingSortRangeOptimized.sort(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_range_uses_comparison_sort() {
        // range 9998 > 10 * 4
        assert!(HybridSort::prefers_comparison(&[2, 3, 4, 10000]));
    }

    #[test]
    fn threshold_is_inclusive_for_counting() {
        // range 40 == 10 * 4 stays on the counting path
        assert!(!HybridSort::prefers_comparison(&[0, 40, 1, 2]));
        assert!(HybridSort::prefers_comparison(&[0, 41, 1, 2]));
    }

    #[test]
    fn sorts_both_paths() {
        let mut wide = vec![500, 1, 250];
        HybridSort.sort(&mut wide);
        assert_eq!(wide, vec![1, 250, 500]);

        let mut narrow = vec![3, 1, 2, 1];
        HybridSort.sort(&mut narrow);
        assert_eq!(narrow, vec![1, 1, 2, 3]);
    }

    #[test]
    fn empty_is_noop() {
        let mut data: Vec<i32> = vec![];
        HybridSort.sort(&mut data);
        assert!(data.is_empty());
    }
}
