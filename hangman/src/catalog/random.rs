//! Random index selection for word picks.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed indices
pub trait RandomSource: Send {
    /// Index in `[0, n)`. Callers never pass `n == 0`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Long-lived generator seeded once from the OS
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a generator seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible generator
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = SeededRandom::new();
        for n in 1..50 {
            assert!(rng.pick(n) < n);
        }
    }

    #[test]
    fn test_pick_single_choice() {
        let mut rng = SeededRandom::new();
        assert_eq!(rng.pick(1), 0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);

        let picks_a: Vec<usize> = (0..20).map(|_| a.pick(1000)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick(1000)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
