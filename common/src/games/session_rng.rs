use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for opponent decisions. The seed is kept so a session can be
/// replayed with `--seed`.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// True with the given probability, clamped to `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.rng.random_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let first: Vec<usize> = (0..16).map(|_| a.index(9)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.index(9)).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = SessionRng::new(1);
        for len in 1..10 {
            assert!(rng.index(len) < len);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::from_random();
        for _ in 0..32 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            assert!(rng.chance(3.5));
            assert!(!rng.chance(f64::NAN));
        }
    }
}
