mod common;

use common::{is_non_decreasing, multiset, random_array, rng};
use twinarray::{
    ConcurrentFrequencySort, CountingSortBasic, CountingSortRangeOptimized, FIXED_ARRAY,
    HybridSort, Sorter, Strategy, generate,
};

fn sorted_by(sorter: &dyn Sorter, input: &[i32]) -> Vec<i32> {
    let mut data = input.to_vec();
    sorter.sort(&mut data);
    data
}

fn reference(input: &[i32]) -> Vec<i32> {
    let mut data = input.to_vec();
    data.sort();
    data
}

#[test]
fn test_all_strategies_sort_random_arrays() {
    let mut rng = rng(2024);
    for trial in 0..50 {
        let len = 1 + trial * 37;
        let input = random_array(&mut rng, len, (trial as i32 + 1) * 50);

        for strategy in Strategy::all() {
            let mut data = input.clone();
            strategy.sort(&mut data, 4);
            assert!(
                is_non_decreasing(&data),
                "{} not sorted on trial {}",
                strategy,
                trial
            );
            assert_eq!(
                multiset(&data),
                multiset(&input),
                "{} changed the multiset on trial {}",
                strategy,
                trial
            );
        }
    }
}

#[test]
fn test_strategies_agree_with_reference() {
    let mut rng = rng(99);
    let concurrent = ConcurrentFrequencySort::new(3);
    for trial in 0..30 {
        let size = 10 + trial * 50;
        let unique = 1 + (trial * 13) % size;
        let input = generate(size, unique, &mut rng).unwrap();
        let expected = reference(&input);

        assert_eq!(sorted_by(&CountingSortRangeOptimized, &input), expected);
        assert_eq!(sorted_by(&concurrent, &input), expected);
        assert_eq!(sorted_by(&HybridSort, &input), expected);
        assert_eq!(sorted_by(&CountingSortBasic, &input), expected);
    }
}

#[test]
fn test_hybrid_matches_counting_on_narrow_range() {
    let mut rng = rng(5);
    let input = random_array(&mut rng, 1000, 9_999);
    assert!(!HybridSort::prefers_comparison(&input));
    assert_eq!(
        sorted_by(&HybridSort, &input),
        sorted_by(&CountingSortRangeOptimized, &input)
    );
}

#[test]
fn test_hybrid_matches_comparison_sort_on_wide_range() {
    let mut rng = rng(6);
    let mut input = random_array(&mut rng, 100, 1_000_000);
    input.push(0);
    input.push(1_000_001);
    assert!(HybridSort::prefers_comparison(&input));
    assert_eq!(sorted_by(&HybridSort, &input), reference(&input));
}

#[test]
fn test_fixed_array_unchanged() {
    for strategy in Strategy::all() {
        let mut data = FIXED_ARRAY.to_vec();
        strategy.sort(&mut data, 2);
        assert_eq!(data, vec![2, 3, 4, 10000], "{}", strategy);
    }
}

#[test]
fn test_single_element() {
    let input = generate(1, 1, &mut rng(1)).unwrap();
    assert_eq!(input.len(), 1);
    for strategy in Strategy::all() {
        let mut data = input.clone();
        strategy.sort(&mut data, 4);
        assert_eq!(data, input);
    }
}

#[test]
fn test_hundred_distinct_basic_matches_range_optimized() {
    let input = generate(100, 100, &mut rng(100)).unwrap();
    assert_eq!(multiset(&input).len(), 100);
    let basic = sorted_by(&CountingSortBasic, &input);
    let optimized = sorted_by(&CountingSortRangeOptimized, &input);
    assert_eq!(basic, optimized);
    assert_eq!(basic, reference(&input));
}

#[test]
fn test_empty_input() {
    for strategy in Strategy::all() {
        let mut data: Vec<i32> = vec![];
        strategy.sort(&mut data, 4);
        assert!(data.is_empty());
    }
}

#[test]
fn test_shuffled_duplicates() {
    use rand::seq::SliceRandom;

    let mut data: Vec<i32> = (0..200).flat_map(|v| std::iter::repeat_n(v, 5)).collect();
    let expected = data.clone();
    data.shuffle(&mut rng(8));

    for strategy in Strategy::all() {
        let mut copy = data.clone();
        strategy.sort(&mut copy, 8);
        assert_eq!(copy, expected, "{}", strategy);
    }
}
