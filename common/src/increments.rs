//! Sources for the splash progress increments.
//!
//! The splash draws a fresh increment on every tick. Production code draws
//! uniformly at random; tests replay a fixed script so every tick is known
//! in advance.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SplashConfig;
use crate::error::ConfigError;

/// Supplies the percentage added to the splash progress on each tick.
pub trait IncrementSource {
    fn next_increment(&mut self) -> f32;
}

impl<S: IncrementSource + ?Sized> IncrementSource for Box<S> {
    fn next_increment(&mut self) -> f32 { (**self).next_increment() }
}

// =============================================================================
// Random Increments
// =============================================================================

/// Uniform draws from the configured half-open range.
#[derive(Clone, Debug)]
pub struct RandomIncrements<R> {
    rng: R,
    min: f32,
    max: f32,
}

impl<R: Rng> RandomIncrements<R> {
    /// Draw from `[config.increment_min, config.increment_max)`.
    pub fn with_config(
        rng: R,
        config: &SplashConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng,
            min: config.increment_min,
            max: config.increment_max,
        })
    }
}

impl RandomIncrements<SmallRng> {
    /// Small, seedable generator over the configured range.
    pub fn seeded(
        seed: u64,
        config: &SplashConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_config(SmallRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> IncrementSource for RandomIncrements<R> {
    fn next_increment(&mut self) -> f32 { self.rng.gen_range(self.min..self.max) }
}

// =============================================================================
// Scripted Increments
// =============================================================================

/// Replays a fixed list of increments, then keeps repeating the last one.
///
/// An empty script yields zero forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIncrements {
    script: Vec<f32>,
    cursor: usize,
}

impl ScriptedIncrements {
    pub fn new(script: impl Into<Vec<f32>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }
}

impl IncrementSource for ScriptedIncrements {
    fn next_increment(&mut self) -> f32 {
        let value = self
            .script
            .get(self.cursor)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(0.0);
        self.cursor += 1;
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SPLASH_INCREMENT_MAX, SPLASH_INCREMENT_MIN};

    fn seeded(seed: u64) -> RandomIncrements<SmallRng> { RandomIncrements::seeded(seed, &SplashConfig::default()).unwrap() }

    #[test]
    fn test_random_draws_stay_in_range() {
        let mut source = seeded(7);
        for _ in 0..10_000 {
            let v = source.next_increment();
            assert!((SPLASH_INCREMENT_MIN..SPLASH_INCREMENT_MAX).contains(&v), "draw {v} out of range");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_increment().to_bits(), b.next_increment().to_bits());
        }
    }

    #[test]
    fn test_custom_range_is_honoured() {
        let config = SplashConfig {
            increment_min: 1.0,
            increment_max: 2.0,
            ..SplashConfig::default()
        };
        let mut source = RandomIncrements::seeded(3, &config).unwrap();
        for _ in 0..1_000 {
            assert!((1.0..2.0).contains(&source.next_increment()));
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let config = SplashConfig {
            increment_min: 5.0,
            increment_max: 5.0,
            ..SplashConfig::default()
        };
        let result = RandomIncrements::with_config(SmallRng::seed_from_u64(0), &config);
        assert!(matches!(result, Err(ConfigError::InvalidIncrementRange { .. })));
    }

    #[test]
    fn test_script_repeats_last_value() {
        let mut source = ScriptedIncrements::new([10.0, 20.0]);
        assert_eq!(source.next_increment(), 10.0);
        assert_eq!(source.next_increment(), 20.0);
        assert_eq!(source.next_increment(), 20.0);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut source = ScriptedIncrements::default();
        assert_eq!(source.next_increment(), 0.0);
    }
}
