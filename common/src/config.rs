//! Timing configuration for the splash screen, the hero typewriter and the
//! page sequencing between them.
//!
//! Every duration is a plain `Millis` value. The constants are the reference
//! timings of the site; the config structs exist so hosts (and tests) can
//! override them without touching the controllers.

use crate::error::ConfigError;
use crate::timer::Millis;

// =============================================================================
// Splash Progress
// =============================================================================

/// Period of the fake load-progress tick.
pub const SPLASH_TICK_MS: Millis = 150;

/// Lower bound (inclusive) of a single progress increment, in percent.
pub const SPLASH_INCREMENT_MIN: f32 = 3.0;

/// Upper bound (exclusive) of a single progress increment, in percent.
pub const SPLASH_INCREMENT_MAX: f32 = 11.0;

/// Pause between reaching 100% and signalling completion.
/// Leaves room for the splash exit animation.
pub const SPLASH_SETTLE_MS: Millis = 500;

/// Progress value at which the splash is complete.
pub const PROGRESS_MAX: f32 = 100.0;

// =============================================================================
// Hero Typewriter
// =============================================================================

/// Delay between two typed characters.
pub const TYPING_TICK_MS: Millis = 100;

/// Delay between two erased characters. Faster than typing on purpose.
pub const DELETING_TICK_MS: Millis = 50;

/// How long a fully typed phrase stays on screen before erasing starts.
pub const PHRASE_PAUSE_MS: Millis = 2000;

/// Phrases cycled in the hero title.
pub const HERO_PHRASES: [&str; 3] = ["Full Stack Developer", "Frontend Developer", "Backend Developer"];

// =============================================================================
// Page Sequencing
// =============================================================================

/// Delay between splash completion and the hero fade-in.
pub const HERO_GRACE_MS: Millis = 300;

/// Delay between splash completion and the navigation bar sliding in.
pub const NAV_GRACE_MS: Millis = 200;

// =============================================================================
// Toasts
// =============================================================================

/// Lifetime of gallery and detail-page notices.
pub const GALLERY_TOAST_MS: Millis = 4000;

/// Lifetime of contact-form outcome notices.
pub const CONTACT_TOAST_MS: Millis = 5000;

// =============================================================================
// Config Structs
// =============================================================================

/// Splash progress simulator settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashConfig {
    pub tick_ms: Millis,
    pub settle_ms: Millis,
    /// Random increments are drawn from `[increment_min, increment_max)`.
    pub increment_min: f32,
    pub increment_max: f32,
}

impl SplashConfig {
    /// Reject settings the tick loop cannot run with.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "splash tick" });
        }
        let (min, max) = (self.increment_min, self.increment_max);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min >= max {
            return Err(ConfigError::InvalidIncrementRange { min, max });
        }
        Ok(())
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            tick_ms: SPLASH_TICK_MS,
            settle_ms: SPLASH_SETTLE_MS,
            increment_min: SPLASH_INCREMENT_MIN,
            increment_max: SPLASH_INCREMENT_MAX,
        }
    }
}

/// Typewriter settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerConfig {
    pub typing_ms: Millis,
    pub deleting_ms: Millis,
    pub pause_ms: Millis,
}

impl CyclerConfig {
    /// Reject settings the tick loop cannot run with.
    ///
    /// A zero pause is fine; zero typing or deleting periods would make a
    /// single `update` spin forever.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "typing" });
        }
        if self.deleting_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "deleting" });
        }
        Ok(())
    }
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_TICK_MS,
            deleting_ms: DELETING_TICK_MS,
            pause_ms: PHRASE_PAUSE_MS,
        }
    }
}

/// Settings for the whole home-page sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequencerConfig {
    pub splash: SplashConfig,
    pub cycler: CyclerConfig,
    pub hero_grace_ms: Millis,
    pub nav_grace_ms: Millis,
}

impl SequencerConfig {
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.splash.validate() {
            return Err(e);
        }
        self.cycler.validate()
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            splash: SplashConfig::default(),
            cycler: CyclerConfig::default(),
            hero_grace_ms: HERO_GRACE_MS,
            nav_grace_ms: NAV_GRACE_MS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timings() {
        let cfg = SequencerConfig::default();
        assert_eq!(cfg.splash.tick_ms, 150);
        assert_eq!(cfg.splash.settle_ms, 500);
        assert_eq!((cfg.splash.increment_min, cfg.splash.increment_max), (3.0, 11.0));
        assert_eq!(cfg.cycler.typing_ms, 100);
        assert_eq!(cfg.cycler.deleting_ms, 50);
        assert_eq!(cfg.cycler.pause_ms, 2000);
        assert_eq!(cfg.hero_grace_ms, 300);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_deleting_faster_than_typing() {
        assert!(DELETING_TICK_MS < TYPING_TICK_MS);
    }

    #[test]
    fn test_zero_periods_rejected() {
        let splash = SplashConfig { tick_ms: 0, ..SplashConfig::default() };
        assert_eq!(splash.validate(), Err(ConfigError::ZeroPeriod { name: "splash tick" }));

        let cycler = CyclerConfig { deleting_ms: 0, ..CyclerConfig::default() };
        assert_eq!(cycler.validate(), Err(ConfigError::ZeroPeriod { name: "deleting" }));

        let zero_pause = CyclerConfig { pause_ms: 0, ..CyclerConfig::default() };
        assert!(zero_pause.validate().is_ok());
    }

    #[test]
    fn test_invalid_increment_ranges_rejected() {
        let with_range = |increment_min, increment_max| SplashConfig {
            increment_min,
            increment_max,
            ..SplashConfig::default()
        };
        for (min, max) in [(5.0, 5.0), (-1.0, 5.0), (0.0, f32::INFINITY), (f32::NAN, 1.0)] {
            assert!(
                matches!(with_range(min, max).validate(), Err(ConfigError::InvalidIncrementRange { .. })),
                "[{min}, {max}) accepted"
            );
        }
        assert!(with_range(1.0, 2.0).validate().is_ok());
    }
}
