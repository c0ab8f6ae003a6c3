use crate::Sorter;

/// Counting sort indexed directly by value.
///
/// Both tables are sized `max + 1`, so memory grows with the largest value
/// rather than with the number of distinct values. Only non-negative input is
/// supported: a negative value indexes past the end of the tables and panics.
pub struct CountingSortBasic;

impl Sorter for CountingSortBasic {
    fn sort(&self, data: &mut [i32]) {
        let max = data.iter().copied().max().unwrap_or(0);
        let slots = max as usize + 1;

        let mut values = vec![0i32; slots];
        let mut frequencies = vec![0usize; slots];

        for &num in data.iter() {
            let slot = num as usize;
            if frequencies[slot] == 0 {
                values[slot] = num;
            }
            frequencies[slot] += 1;
        }

        let mut index = 0;
        for slot in 0..slots {
            let count = frequencies[slot];
            if count > 0 {
                data[index..index + count].fill(values[slot]);
                index += count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_values() {
        let mut data = vec![5, 0, 3, 3, 1, 5, 2];
        CountingSortBasic.sort(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 3, 5, 5]);
    }

    #[test]
    fn empty_is_noop() {
        let mut data: Vec<i32> = vec![];
        CountingSortBasic.sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn all_zeros() {
        let mut data = vec![0; 16];
        CountingSortBasic.sort(&mut data);
        assert_eq!(data, vec![0; 16]);
    }

    #[test]
    #[should_panic]
    fn negative_values_are_unsupported() {
        let mut data = vec![3, -1, 2];
        CountingSortBasic.sort(&mut data);
    }
}
