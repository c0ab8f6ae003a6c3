// Counting sort strategies and the benchmark that compares them

#![allow(clippy::needless_range_loop)]

/// In-place sort of an integer slice.
pub trait Sorter {
    fn sort(&self, data: &mut [i32]);
}

pub mod benchmark;
pub mod config;
pub mod error;
pub mod generator;
pub mod memory;
pub mod rand;
pub mod report;
pub mod sort;

// Export the main types
pub use benchmark::{BenchmarkRunner, FIXED_ARRAY};
pub use config::BenchConfig;
pub use error::{Error, Field, Result};
pub use generator::{MAX_ARRAY_SIZE, generate};
pub use memory::MemoryProbe;
pub use report::{BenchmarkResult, Report};
pub use sort::Strategy;
pub use sort::basic::CountingSortBasic;
pub use sort::concurrent::ConcurrentFrequencySort;
pub use sort::frequency::FrequencyTable;
pub use sort::hybrid::{HYBRID_RANGE_FACTOR, HybridSort};
pub use sort::range::CountingSortRangeOptimized;

/// Benchmark all strategies on a fresh random array, seeded from the OS.
///
/// Callers are expected to have validated the arguments already (see
/// [`BenchConfig::from_text`]); invalid values yield [`Error::InvalidArgument`].
pub fn run(array_size: usize, unique_values: usize) -> Result<Report> {
    let mut rng = crate::rand::seeded_rng(None);
    BenchmarkRunner::default().run(array_size, unique_values, &mut rng)
}
