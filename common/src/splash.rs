//! Splash screen progress simulation.
//!
//! Drives a believable, non-linear loading percentage with nothing actually
//! loading behind it. Every tick adds a random increment; once the value is
//! clamped at 100 the tick stops, a short settle delay lets the exit
//! animation play, and the completion callback runs exactly once.
//!
//! # Phases
//!
//! ```text
//! Idle ──start──▶ Running ──(tick, < 100)──▶ Running
//!                    │
//!                    └──(tick reaches 100)──▶ Completing ──(settle)──▶ Done
//!
//! any non-Done phase ──teardown──▶ Cancelled
//! ```
//!
//! `Done` and `Cancelled` are terminal. A torn-down splash drops its
//! callback without running it.

use core::fmt;

use tracing::{debug, info, trace};

use crate::config::{PROGRESS_MAX, SplashConfig};
use crate::error::ConfigError;
use crate::increments::IncrementSource;
use crate::timer::{Millis, Timer};

/// Lifecycle of a [`SplashProgress`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SplashPhase {
    /// Created, not started.
    #[default]
    Idle,
    /// Ticking towards 100%.
    Running,
    /// At 100%, waiting out the settle delay.
    Completing,
    /// Completion callback has run.
    Done,
    /// Torn down before completion.
    Cancelled,
}

impl SplashPhase {
    /// Whether no further transition can happen.
    #[inline]
    pub const fn is_terminal(self) -> bool { matches!(self, Self::Done | Self::Cancelled) }
}

type Callback = Box<dyn FnOnce()>;

/// Fake load-progress simulator.
pub struct SplashProgress<S> {
    config: SplashConfig,
    source: S,
    progress: f32,
    phase: SplashPhase,
    tick: Timer,
    settle: Timer,
    completed_at: Option<Millis>,
    on_complete: Option<Callback>,
}

impl<S: IncrementSource> SplashProgress<S> {
    /// Create an idle simulator at 0%.
    pub fn new(
        config: SplashConfig,
        source: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            progress: 0.0,
            phase: SplashPhase::Idle,
            tick: Timer::new(),
            settle: Timer::new(),
            completed_at: None,
            on_complete: None,
        })
    }

    /// Begin ticking. `on_complete` runs once, a settle delay after 100%.
    ///
    /// Has no effect unless the simulator is idle.
    pub fn start<F>(
        &mut self,
        now: Millis,
        on_complete: F,
    ) where
        F: FnOnce() + 'static,
    {
        if self.phase != SplashPhase::Idle {
            debug!(phase = ?self.phase, "splash already started");
            return;
        }
        self.on_complete = Some(Box::new(on_complete));
        self.phase = SplashPhase::Running;
        self.tick.arm_after(now, self.config.tick_ms);
        info!(tick_ms = self.config.tick_ms, "splash started");
    }

    /// Process every tick due at `now`.
    ///
    /// Returns `true` if progress or phase changed.
    pub fn update(
        &mut self,
        now: Millis,
    ) -> bool {
        let mut changed = false;

        while self.tick.poll(now) {
            let fired_at = self.tick.last_fired();
            self.advance(fired_at);
            changed = true;
        }

        if self.settle.poll(now) {
            self.finish();
            changed = true;
        }

        changed
    }

    /// Cancel all pending timers. The completion callback will never run.
    pub fn teardown(&mut self) {
        self.tick.cancel();
        self.settle.cancel();
        if self.phase.is_terminal() {
            return;
        }
        self.on_complete = None;
        debug!(progress = self.progress, phase = ?self.phase, "splash torn down");
        self.phase = SplashPhase::Cancelled;
    }

    /// Current progress in `[0, 100]`.
    #[inline]
    pub const fn progress(&self) -> f32 { self.progress }

    /// Progress rounded for display.
    #[inline]
    pub fn percent(&self) -> u8 { self.progress.round() as u8 }

    #[inline]
    pub const fn phase(&self) -> SplashPhase { self.phase }

    /// Time the completion callback was scheduled for, once it has run.
    #[inline]
    pub const fn completed_at(&self) -> Option<Millis> { self.completed_at }

    /// Whether any timer is still pending.
    #[inline]
    pub const fn has_pending_timer(&self) -> bool { self.tick.is_armed() || self.settle.is_armed() }

    fn advance(
        &mut self,
        fired_at: Millis,
    ) {
        let increment = self.source.next_increment();
        // `max` ignores NaN, so a NaN draw counts as zero.
        let increment = increment.max(0.0);
        self.progress = (self.progress + increment).min(PROGRESS_MAX);
        trace!(progress = self.progress, increment, "splash tick");

        if self.progress >= PROGRESS_MAX {
            self.progress = PROGRESS_MAX;
            self.phase = SplashPhase::Completing;
            self.settle.arm_after(fired_at, self.config.settle_ms);
            debug!(at = fired_at, settle_ms = self.config.settle_ms, "splash reached 100%");
        } else if !self.tick.arm_next(self.config.tick_ms) {
            debug!(progress = self.progress, "clock exhausted, splash ticking stopped");
        }
    }

    fn finish(&mut self) {
        self.phase = SplashPhase::Done;
        self.completed_at = Some(self.settle.last_fired());
        info!(at = self.settle.last_fired(), "splash complete");
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl<S> fmt::Debug for SplashProgress<S> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("SplashProgress")
            .field("progress", &self.progress)
            .field("phase", &self.phase)
            .field("tick", &self.tick)
            .field("settle", &self.settle)
            .field("has_callback", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
