use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::sort::Strategy;

/// One strategy run on one input.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub strategy: Strategy,
    pub elapsed_ms: f64,
    pub memory_delta_bytes: i64,
    /// Output was non-decreasing (checked after the timed window).
    pub sorted: bool,
}

impl BenchmarkResult {
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn complexity(&self) -> &'static str {
        self.strategy.complexity()
    }

    pub fn memory_kb(&self) -> f64 {
        self.memory_delta_bytes as f64 / 1024.0
    }
}

/// Results for the generated array followed by the fixed array.
#[derive(Clone, Debug)]
pub struct Report {
    pub array_size: usize,
    pub unique_values: usize,
    pub random: Vec<BenchmarkResult>,
    pub fixed: Vec<BenchmarkResult>,
}

impl Report {
    pub fn all_sorted(&self) -> bool {
        self.random.iter().chain(&self.fixed).all(|r| r.sorted)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "TwinArray Sort Results:")?;
        writeln!(f, "Array Size: {}", self.array_size)?;
        writeln!(f, "Unique Values: {}", self.unique_values)?;
        writeln!(f)?;
        for result in &self.random {
            writeln!(
                f,
                "{}: {:.2} ms, Memory: {:.2} KB ({})",
                result.name(),
                result.elapsed_ms,
                result.memory_kb(),
                result.complexity()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Testing with array: {{2, 3, 4, 10000}}")?;
        for result in &self.fixed {
            writeln!(
                f,
                "{}: {:.2} ms, Memory: {:.2} KB",
                result.name(),
                result.elapsed_ms,
                result.memory_kb()
            )?;
        }
        Ok(())
    }
}
