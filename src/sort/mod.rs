pub mod basic;
pub mod concurrent;
pub mod frequency;
pub mod hybrid;
pub mod range;

use crate::Sorter;
use basic::CountingSortBasic;
use concurrent::ConcurrentFrequencySort;
use hybrid::HybridSort;
use range::CountingSortRangeOptimized;

/// The strategies compared by the benchmark, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Tables indexed by raw value
    Basic,
    /// Tables indexed by offset from the minimum
    RangeOptimized,
    /// Parallel frequency counting, ordered reconstruction
    Concurrent,
    /// Comparison sort for sparse ranges, range-optimized otherwise
    Hybrid,
}

impl Strategy {
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::Basic,
            Strategy::RangeOptimized,
            Strategy::Concurrent,
            Strategy::Hybrid,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Basic => "Original TwinArray Sort",
            Strategy::RangeOptimized => "Optimized TwinArray Sort",
            Strategy::Concurrent => "Parallel TwinArray Sort",
            Strategy::Hybrid => "Hybrid Sort",
        }
    }

    /// Time and space annotation printed next to the random-array results.
    pub fn complexity(&self) -> &'static str {
        match self {
            Strategy::Basic => "O(n + k), O(n + k)",
            Strategy::RangeOptimized => {
                "O(n + k), O(k) where k is the range instead of the max value of the array"
            }
            Strategy::Concurrent => "O(n log n), O(n)",
            Strategy::Hybrid => "O(n log n), O(n)",
        }
    }

    /// Sort `data` in place; `partitions` only affects the concurrent strategy.
    pub fn sort(&self, data: &mut [i32], partitions: usize) {
        match self {
            Strategy::Basic => CountingSortBasic.sort(data),
            Strategy::RangeOptimized => CountingSortRangeOptimized.sort(data),
            Strategy::Concurrent => ConcurrentFrequencySort::new(partitions).sort(data),
            Strategy::Hybrid => HybridSort.sort(data),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
