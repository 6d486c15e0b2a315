use std::collections::HashMap;

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use spotshuffle::shuffle::permutation::{fisher_yates, swap_steps};

// Chi-square critical value for 23 degrees of freedom is 49.7 at p = 0.001;
// the bound leaves headroom so a fixed seed never sits near the edge.
const CHI_SQUARE_BOUND: f64 = 60.0;

fn chi_square(counts: &HashMap<Vec<u8>, usize>, categories: usize, trials: usize) -> f64 {
    let expected = trials as f64 / categories as f64;
    let observed: f64 = counts
        .values()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    // orderings that never showed up
    let missing = (categories - counts.len()) as f64 * expected;
    observed + missing
}

#[test]
fn test_swap_steps_cover_every_position_once() {
    let mut rng = StdRng::seed_from_u64(7);
    let steps: Vec<(usize, usize)> = swap_steps(6, &mut rng).collect();

    let indices: Vec<usize> = steps.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![5, 4, 3, 2, 1]);
    assert!(steps.iter().all(|(i, j)| j <= i));
}

#[test]
fn test_swap_steps_for_tiny_inputs() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(swap_steps(0, &mut rng).count(), 0);
    assert_eq!(swap_steps(1, &mut rng).count(), 0);
    assert_eq!(swap_steps(2, &mut rng).len(), 1);
}

#[test]
fn test_fisher_yates_empty_and_single() {
    let mut rng = StdRng::seed_from_u64(3);

    let mut empty: Vec<u32> = Vec::new();
    fisher_yates(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut single = vec!["only"];
    fisher_yates(&mut single, &mut rng);
    assert_eq!(single, vec!["only"]);
}

#[test]
fn test_fisher_yates_is_uniform_over_four_elements() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let trials = 24_000;
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

    for _ in 0..trials {
        let mut items = vec![0u8, 1, 2, 3];
        fisher_yates(&mut items, &mut rng);
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 24, "every ordering should appear");
    let stat = chi_square(&counts, 24, trials);
    assert!(stat < CHI_SQUARE_BOUND, "chi-square {} too high", stat);
}

#[test]
fn test_fisher_yates_changes_order_of_large_input() {
    let mut rng = StdRng::seed_from_u64(99);
    let original: Vec<u32> = (0..500).collect();
    let mut shuffled = original.clone();
    fisher_yates(&mut shuffled, &mut rng);

    assert_ne!(original, shuffled);
}

proptest! {
    #[test]
    fn prop_fisher_yates_keeps_multiset(mut items in proptest::collection::vec(0u8..8, 0..200), seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut expected = items.clone();
        fisher_yates(&mut items, &mut rng);

        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }
}
