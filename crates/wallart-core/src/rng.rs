//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a mocked or scripted
//! implementation is injected so word-reveal pacing is repeatable.

use rand::Rng as _;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRng;

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_rng_respects_inclusive_bounds() {
        let mut rng = SystemRng;
        for _ in 0..100 {
            let value = rng.next_u32_range(3, 5);
            assert!((3..=5).contains(&value));
        }
    }

    #[test]
    fn test_system_rng_degenerate_range_is_constant() {
        let mut rng = SystemRng;
        assert_eq!(rng.next_u32_range(7, 7), 7);
    }
}
