//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production RNG backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a reproducible RNG from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for StdRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Picks a uniform index into a collection of `len` items.
///
/// Returns `None` when `len` is zero.
pub fn pick_index(rng: &mut dyn DeterministicRng, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let max = u32::try_from(last).unwrap_or(u32::MAX);
    Some(rng.next_u32_range(0, max) as usize)
}

/// Shuffles `items` in place with a Fisher–Yates pass.
///
/// Every call draws fresh values from `rng`, so two calls over the same
/// input generally produce different permutations.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let max = u32::try_from(i).unwrap_or(u32::MAX);
        let j = rng.next_u32_range(0, max) as usize;
        items.swap(i, j.min(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRandom::seeded(7);
        let mut b = StdRandom::seeded(7);

        let left: Vec<u32> = (0..16).map(|_| a.next_u32_range(0, 1000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32_range(0, 1000)).collect();

        assert_eq!(left, right);
    }

    #[test]
    fn test_next_u32_range_stays_in_bounds() {
        let mut rng = StdRandom::seeded(42);
        for _ in 0..1000 {
            let v = rng.next_u32_range(3, 9);
            assert!((3..=9).contains(&v));
        }
    }

    #[test]
    fn test_pick_index_empty_returns_none() {
        let mut rng = StdRandom::seeded(1);
        assert_eq!(pick_index(&mut rng, 0), None);
    }

    #[test]
    fn test_pick_index_single_item_returns_zero() {
        let mut rng = StdRandom::seeded(1);
        assert_eq!(pick_index(&mut rng, 1), Some(0));
    }

    #[test]
    fn test_shuffle_preserves_members() {
        let mut rng = StdRandom::seeded(99);
        let mut items: Vec<u32> = (0..50).collect();

        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_empty_and_single_are_untouched() {
        let mut rng = StdRandom::seeded(5);
        let mut empty: Vec<u32> = Vec::new();
        let mut single = vec![1];

        shuffle(&mut empty, &mut rng);
        shuffle(&mut single, &mut rng);

        assert!(empty.is_empty());
        assert_eq!(single, vec![1]);
    }
}
