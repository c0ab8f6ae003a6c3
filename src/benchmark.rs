use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::generator::generate;
use crate::memory::{self, MemoryProbe};
use crate::report::{BenchmarkResult, Report};
use crate::sort::Strategy;
use crate::sort::concurrent::{clamp_partitions, default_partitions};

/// Input benchmarked after the generated array.
pub const FIXED_ARRAY: [i32; 4] = [2, 3, 4, 10000];

/// Runs every strategy on its own copy of an input and records time and memory.
pub struct BenchmarkRunner {
    partitions: usize,
    probe: MemoryProbe,
}

impl BenchmarkRunner {
    /// `partitions` is capped at [`max_partitions`](crate::sort::concurrent::max_partitions).
    pub fn new(partitions: usize, probe: MemoryProbe) -> Self {
        let capped = clamp_partitions(partitions);
        if capped != partitions {
            warn!(requested = partitions, used = capped, "worker count adjusted");
        }
        Self {
            partitions: capped,
            probe,
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn probe(&self) -> MemoryProbe {
        self.probe
    }

    /// Generate one array and benchmark all strategies on it and on [`FIXED_ARRAY`].
    pub fn run<R: Rng + ?Sized>(
        &self,
        array_size: usize,
        unique_values: usize,
        rng: &mut R,
    ) -> Result<Report> {
        let array = generate(array_size, unique_values, rng)?;
        info!(
            array_size,
            unique_values,
            partitions = self.partitions,
            probe = self.probe.name(),
            "starting benchmark"
        );

        let random = self.measure_all(&array);
        let fixed = self.measure_all(&FIXED_ARRAY);

        Ok(Report {
            array_size,
            unique_values,
            random,
            fixed,
        })
    }

    /// Every strategy in report order, each on a fresh clone of `input`.
    pub fn measure_all(&self, input: &[i32]) -> Vec<BenchmarkResult> {
        Strategy::all()
            .into_iter()
            .map(|strategy| self.measure(strategy, input))
            .collect()
    }

    pub fn measure(&self, strategy: Strategy, input: &[i32]) -> BenchmarkResult {
        let mut data = input.to_vec();

        memory::quiesce();
        let memory_before = self.probe.begin();
        let start = Instant::now();
        strategy.sort(&mut data, self.partitions);
        let elapsed = start.elapsed();
        let memory_after = self.probe.end();

        let sorted = data.is_sorted();
        if !sorted {
            warn!(strategy = strategy.name(), len = data.len(), "output is not sorted");
        }

        let result = BenchmarkResult {
            strategy,
            elapsed_ms: elapsed.as_nanos() as f64 / 1e6,
            memory_delta_bytes: memory::delta(memory_before, memory_after),
            sorted,
        };
        debug!(
            strategy = strategy.name(),
            len = data.len(),
            elapsed_ms = result.elapsed_ms,
            memory_delta_bytes = result.memory_delta_bytes,
            "measured"
        );
        result
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        let probe = MemoryProbe::detect();
        if probe == MemoryProbe::Disabled {
            warn!("no memory source available, memory deltas will read 0");
        }
        Self::new(default_partitions(), probe)
    }
}
