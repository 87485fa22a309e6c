use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

/// True with probability `p`.
pub fn roll(rng: &mut dyn RngCore, p: f64) -> bool {
    rng.random_range(0.0..1.0) < p
}

/// One level picked uniformly, or `None` if there are none.
pub fn pick_level(rng: &mut dyn RngCore, levels: &[u32]) -> Option<u32> {
    levels.choose(rng).copied()
}

/// Up to `count` distinct levels sampled without replacement.
pub fn sample_levels(rng: &mut dyn RngCore, levels: &[u32], count: usize) -> Vec<u32> {
    levels
        .choose_multiple(rng, count.min(levels.len()))
        .copied()
        .collect()
}

/// Whole-number share of `amount`, truncated toward zero.
pub fn fraction_of(amount: u32, fraction: f64) -> u32 {
    (f64::from(amount) * fraction).floor() as u32
}
