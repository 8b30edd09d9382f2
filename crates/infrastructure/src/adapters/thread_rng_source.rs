//! Thread-rng adapter for the random source port

use application::ports::RandomSource;
use rand::Rng;

/// `RandomSource` backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    /// Create a new thread-rng source
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn draw(&self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_the_bound() {
        let source = ThreadRngSource::new();
        for _ in 0..1000 {
            assert!(source.draw(12) < 12);
        }
    }

    #[test]
    fn bound_of_one_always_draws_zero() {
        let source = ThreadRngSource::new();
        for _ in 0..10 {
            assert_eq!(source.draw(1), 0);
        }
    }
}
