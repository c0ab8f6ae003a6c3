#![allow(dead_code)]

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::SmallRng;
use twinarray::rand::seeded_rng;

pub fn rng(seed: u64) -> SmallRng {
    seeded_rng(Some(seed))
}

pub fn is_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

pub fn multiset(data: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &v in data {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// `len` values drawn uniformly from `[0, max]`.
pub fn random_array(rng: &mut SmallRng, len: usize, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(0..=max)).collect()
}
