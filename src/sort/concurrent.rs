use crossbeam::channel;

use super::frequency::FrequencyTable;
use crate::Sorter;

/// Frequency sort with a parallel counting phase.
///
/// The input is split into contiguous chunks, each counted on its own scoped
/// thread. Partial tables are sent back over a channel and summed on the
/// calling thread, which then rewrites the slice in ascending key order.
pub struct ConcurrentFrequencySort {
    partitions: usize,
}

impl ConcurrentFrequencySort {
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: clamp_partitions(partitions),
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Count `data` across worker threads and merge the partial tables.
    pub fn frequencies(&self, data: &[i32]) -> FrequencyTable {
        if data.is_empty() {
            return FrequencyTable::new();
        }

        let num_chunks = self.partitions.min(data.len());
        let chunk_size = data.len().div_ceil(num_chunks);
        let (sender, receiver) = channel::unbounded();

        std::thread::scope(|s| {
            for chunk in data.chunks(chunk_size) {
                let sender = sender.clone();
                s.spawn(move || {
                    // Receiver outlives the scope, send cannot fail.
                    let _ = sender.send(FrequencyTable::from_slice(chunk));
                });
            }
        });
        drop(sender);

        let mut table = FrequencyTable::new();
        for partial in receiver {
            table.merge(partial);
        }
        table
    }
}

impl Default for ConcurrentFrequencySort {
    fn default() -> Self {
        Self::new(default_partitions())
    }
}

impl Sorter for ConcurrentFrequencySort {
    fn sort(&self, data: &mut [i32]) {
        if data.is_empty() {
            return;
        }

        let table = self.frequencies(data);

        let mut index = 0;
        for (value, count) in table.into_ascending() {
            data[index..index + count].fill(value);
            index += count;
        }
    }
}

/// Worker count used when none is configured.
pub fn default_partitions() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Workers allowed per available core.
pub const PARTITIONS_PER_CORE: usize = 4;

/// Largest worker count accepted; more would only add spawn cost.
pub fn max_partitions() -> usize {
    default_partitions() * PARTITIONS_PER_CORE
}

/// Bound a requested worker count to `[1, max_partitions()]`.
pub fn clamp_partitions(partitions: usize) -> usize {
    partitions.clamp(1, max_partitions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_length_for_any_partitioning() {
        let data: Vec<i32> = (0..1000).map(|i| (i * 37) % 101).collect();
        let expected = FrequencyTable::from_slice(&data);
        for partitions in [1, 2, 3, 7, 16, 2000, 1_000_000] {
            let table = ConcurrentFrequencySort::new(partitions).frequencies(&data);
            assert_eq!(table.total(), data.len());
            assert_eq!(table, expected, "partitions = {}", partitions);
        }
    }

    #[test]
    fn sorts_with_many_workers() {
        let mut data = vec![9, -4, 9, 0, 2, 2, 2, -4, 100];
        ConcurrentFrequencySort::new(4).sort(&mut data);
        assert_eq!(data, vec![-4, -4, 0, 2, 2, 2, 9, 9, 100]);
    }

    #[test]
    fn zero_partitions_means_one() {
        assert_eq!(ConcurrentFrequencySort::new(0).partitions(), 1);
    }

    #[test]
    fn huge_partition_count_is_capped() {
        let sorter = ConcurrentFrequencySort::new(1_000_000);
        assert_eq!(sorter.partitions(), max_partitions());
        assert!(sorter.partitions() <= default_partitions() * PARTITIONS_PER_CORE);

        let mut data: Vec<i32> = (0..10_000).rev().collect();
        sorter.sort(&mut data);
        assert!(data.is_sorted());
    }

    #[test]
    fn empty_is_noop() {
        let mut data: Vec<i32> = vec![];
        ConcurrentFrequencySort::new(4).sort(&mut data);
        assert!(data.is_empty());
    }
}
