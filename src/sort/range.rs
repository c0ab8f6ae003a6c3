use crate::Sorter;

/// Counting sort indexed by `value - min`.
///
/// The tables cover `max - min + 1` slots, so large but tightly clustered
/// values stay cheap and negative values are handled.
pub struct CountingSortRangeOptimized;

impl Sorter for CountingSortRangeOptimized {
    fn sort(&self, data: &mut [i32]) {
        if data.is_empty() {
            return;
        }

        let (min, max) = min_max(data);
        let range = (max as i64 - min as i64 + 1) as usize;

        let mut values = vec![0i32; range];
        let mut frequencies = vec![0usize; range];

        for &num in data.iter() {
            let slot = (num as i64 - min as i64) as usize;
            if frequencies[slot] == 0 {
                values[slot] = num;
            }
            frequencies[slot] += 1;
        }

        let mut index = 0;
        for slot in 0..range {
            let count = frequencies[slot];
            if count > 0 {
                data[index..index + count].fill(values[slot]);
                index += count;
            }
        }
    }
}

/// Smallest and largest value of a non-empty slice in one pass.
pub(crate) fn min_max(data: &[i32]) -> (i32, i32) {
    data.iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
