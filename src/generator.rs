use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// Upper bound for both the array length and the distinct value count.
pub const MAX_ARRAY_SIZE: usize = 10_000_000;

/// Random array of `size` elements holding exactly `unique_values` distinct values.
///
/// Distinct values are drawn without replacement from `[0, 2 * size)`, then
/// every slot is filled by sampling that pool uniformly with replacement. The
/// pool keeps draw order, so the same seed always yields the same array.
///
/// Every pool value is guaranteed to appear: the first `unique_values` slots
/// take one pool value each before being shuffled into the rest.
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    unique_values: usize,
    rng: &mut R,
) -> Result<Vec<i32>> {
    if size == 0 || size > MAX_ARRAY_SIZE {
        return Err(Error::InvalidArgument(format!(
            "array size {} outside [1, {}]",
            size, MAX_ARRAY_SIZE
        )));
    }
    if unique_values == 0 || unique_values > size {
        return Err(Error::InvalidArgument(format!(
            "unique values {} outside [1, {}]",
            unique_values, size
        )));
    }

    let upper = (size * 2) as i32;
    let mut seen = HashSet::with_capacity(unique_values);
    let mut pool = Vec::with_capacity(unique_values);
    while pool.len() < unique_values {
        let candidate = rng.random_range(0..upper);
        if seen.insert(candidate) {
            pool.push(candidate);
        }
    }

    let mut array = Vec::with_capacity(size);
    array.extend_from_slice(&pool);
    for _ in unique_values..size {
        array.push(pool[rng.random_range(0..unique_values)]);
    }

    array.shuffle(rng);

    Ok(array)
}
