use std::collections::HashMap;

/// Occurrence count per distinct value.
///
/// Merging sums counts per key, so tables built over any partitioning of an
/// input merge to the same result in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<i32, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(data: &[i32]) -> Self {
        let mut table = Self::new();
        for &value in data {
            table.increment(value);
        }
        table
    }

    pub fn increment(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn merge(&mut self, other: FrequencyTable) {
        // Fold the smaller table into the larger one.
        let mut other = other;
        if other.counts.len() > self.counts.len() {
            std::mem::swap(self, &mut other);
        }
        for (value, count) in other.counts {
            *self.counts.entry(value).or_insert(0) += count;
        }
    }

    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the length of the scanned input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn into_ascending(self) -> Vec<(i32, usize)> {
        let mut entries: Vec<(i32, usize)> = self.counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(value, _)| value);
        entries
    }
}
