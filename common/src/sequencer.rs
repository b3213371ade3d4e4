//! Home page sequencing: splash first, hero afterwards.
//!
//! The page keeps scrolling locked and the hero hidden until the splash
//! completion callback has run. After that the navigation bar and the hero
//! fade in after short grace delays, and the hero typewriter starts with
//! the hero reveal.
//!
//! ```text
//! Loading ──(splash callback)──▶ Revealing ──(hero grace)──▶ Ready
//!
//! any stage ──teardown──▶ Closed
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use crate::config::SequencerConfig;
use crate::error::ConfigError;
use crate::event_log::{EventLog, PageEvent};
use crate::increments::IncrementSource;
use crate::splash::{SplashPhase, SplashProgress};
use crate::timer::{Millis, Timer};
use crate::typewriter::TextCycler;

/// Where the home page is in its start-up sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stage {
    /// Splash visible, page scroll locked.
    #[default]
    Loading,
    /// Splash done, waiting for the hero grace delay.
    Revealing,
    /// Hero visible and typing.
    Ready,
    /// Torn down.
    Closed,
}

/// Orchestrates the splash simulator and the hero typewriter.
pub struct HomeSequencer<S> {
    config: SequencerConfig,
    splash: SplashProgress<S>,
    cycler: TextCycler,
    stage: Stage,
    started: bool,
    scroll_locked: bool,
    nav_visible: bool,
    /// Set by the splash completion callback.
    splash_signal: Rc<Cell<bool>>,
    hero_reveal: Timer,
    nav_reveal: Timer,
    /// Latest host time seen, used to stamp teardown.
    last_seen: Millis,
    log: EventLog,
}

impl<S: IncrementSource> HomeSequencer<S> {
    pub fn new<I>(
        config: SequencerConfig,
        source: S,
        phrases: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        config.validate()?;
        Ok(Self {
            config,
            splash: SplashProgress::new(config.splash, source)?,
            cycler: TextCycler::new(phrases, config.cycler)?,
            stage: Stage::Loading,
            started: false,
            scroll_locked: false,
            nav_visible: false,
            splash_signal: Rc::new(Cell::new(false)),
            hero_reveal: Timer::new(),
            nav_reveal: Timer::new(),
            last_seen: 0,
            log: EventLog::new(),
        })
    }

    /// Lock scrolling and start the splash.
    pub fn start(
        &mut self,
        now: Millis,
    ) {
        if self.started {
            return;
        }
        self.started = true;
        self.scroll_locked = true;
        self.last_seen = now;

        let signal = Rc::clone(&self.splash_signal);
        self.splash.start(now, move || signal.set(true));
        self.log.record(now, PageEvent::SplashStarted);
    }

    /// Advance every controller to `now`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn update(
        &mut self,
        now: Millis,
    ) -> bool {
        if self.stage == Stage::Closed {
            return false;
        }
        self.last_seen = self.last_seen.max(now);

        let mut changed = self.splash.update(now);

        if self.stage == Stage::Loading && self.splash_signal.get() {
            let completed_at = self.splash.completed_at().unwrap_or(now);
            self.on_splash_complete(completed_at);
            changed = true;
        }

        if self.nav_reveal.poll(now) {
            self.nav_visible = true;
            self.log.record(self.nav_reveal.last_fired(), PageEvent::NavShown);
            changed = true;
        }

        if self.hero_reveal.poll(now) {
            let revealed_at = self.hero_reveal.last_fired();
            self.stage = Stage::Ready;
            self.cycler.start(revealed_at);
            self.log.record(revealed_at, PageEvent::HeroRevealed);
            info!(at = revealed_at, "hero revealed");
            changed = true;
        }

        changed |= self.cycler.update(now);
        changed
    }

    /// Tear down every controller and release the scroll lock.
    pub fn teardown(&mut self) {
        self.splash.teardown();
        self.cycler.teardown();
        self.hero_reveal.cancel();
        self.nav_reveal.cancel();
        self.scroll_locked = false;
        if self.stage != Stage::Closed {
            self.stage = Stage::Closed;
            self.log.record(self.last_seen, PageEvent::Closed);
        }
    }

    #[inline]
    pub const fn stage(&self) -> Stage { self.stage }

    #[inline]
    pub const fn scroll_locked(&self) -> bool { self.scroll_locked }

    #[inline]
    pub fn hero_visible(&self) -> bool { self.stage == Stage::Ready }

    #[inline]
    pub const fn nav_visible(&self) -> bool { self.nav_visible }

    /// Whether the splash overlay should still be drawn.
    #[inline]
    pub fn splash_visible(&self) -> bool { self.stage == Stage::Loading }

    #[inline]
    pub fn progress_percent(&self) -> u8 { self.splash.percent() }

    #[inline]
    pub const fn splash_phase(&self) -> SplashPhase { self.splash.phase() }

    /// Whether the splash still has a tick or settle deadline pending.
    #[inline]
    pub const fn splash_pending(&self) -> bool { self.splash.has_pending_timer() }

    /// Hero title text, empty until the hero is revealed.
    #[inline]
    pub fn hero_text(&self) -> &str { self.cycler.display() }

    #[inline]
    pub const fn cycler(&self) -> &TextCycler { &self.cycler }

    #[inline]
    pub const fn event_log(&self) -> &EventLog { &self.log }

    /// Splash completion is only observed here, after the callback ran.
    fn on_splash_complete(
        &mut self,
        completed_at: Millis,
    ) {
        self.stage = Stage::Revealing;
        self.scroll_locked = false;
        self.hero_reveal.arm_after(completed_at, self.config.hero_grace_ms);
        self.nav_reveal.arm_after(completed_at, self.config.nav_grace_ms);
        self.log.record(completed_at, PageEvent::SplashComplete);
        info!(at = completed_at, "scroll unlocked");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::increments::ScriptedIncrements;

    fn sequencer(script: &[f32]) -> HomeSequencer<ScriptedIncrements> {
        HomeSequencer::new(SequencerConfig::default(), ScriptedIncrements::new(script.to_vec()), ["Go"]).unwrap()
    }

    /// Poll like a 60 FPS host until `end`.
    fn run_until(
        seq: &mut HomeSequencer<ScriptedIncrements>,
        from: Millis,
        end: Millis,
    ) {
        let mut now = from;
        while now <= end {
            seq.update(now);
            now += 16;
        }
        seq.update(end);
    }

    #[test]
    fn test_not_started_does_nothing() {
        let mut seq = sequencer(&[100.0]);
        seq.update(10_000);
        assert_eq!(seq.stage(), Stage::Loading);
        assert!(!seq.scroll_locked());
        assert_eq!(seq.progress_percent(), 0);
    }

    #[test]
    fn test_scroll_locked_and_hero_hidden_while_loading() {
        // 100% at t=150, callback at t=650.
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        assert!(seq.scroll_locked());

        run_until(&mut seq, 0, 649);
        assert_eq!(seq.progress_percent(), 100);
        assert_eq!(seq.stage(), Stage::Loading);
        assert!(seq.scroll_locked());
        assert!(!seq.hero_visible());
        assert!(seq.splash_visible());
        assert_eq!(seq.hero_text(), "");
    }

    #[test]
    fn test_reveal_after_grace_delays() {
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        seq.update(650);
        assert_eq!(seq.stage(), Stage::Revealing);
        assert!(!seq.scroll_locked());
        assert!(!seq.nav_visible());

        seq.update(850);
        assert!(seq.nav_visible());
        assert!(!seq.hero_visible());

        seq.update(950);
        assert_eq!(seq.stage(), Stage::Ready);
        assert!(seq.hero_visible());
        assert!(seq.cycler().is_running());
    }

    #[test]
    fn test_typewriter_starts_with_hero() {
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        seq.update(950);
        assert_eq!(seq.hero_text(), "");

        seq.update(1049);
        assert_eq!(seq.hero_text(), "");
        seq.update(1050);
        assert_eq!(seq.hero_text(), "G");
    }

    #[test]
    fn test_single_late_update_runs_whole_sequence() {
        // Completion at 650, hero at 950, typing steps at 1050 and 1150.
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        seq.update(1_150);
        assert_eq!(seq.stage(), Stage::Ready);
        assert!(seq.nav_visible());
        assert_eq!(seq.hero_text(), "Go");
    }

    #[test]
    fn test_teardown_during_loading() {
        let mut seq = sequencer(&[40.0]);
        seq.start(0);
        seq.update(300);
        assert!(seq.splash_pending());
        seq.teardown();

        assert_eq!(seq.stage(), Stage::Closed);
        assert!(!seq.splash_pending());
        assert!(!seq.scroll_locked());
        assert_eq!(seq.splash_phase(), SplashPhase::Cancelled);
        assert!(!seq.update(60_000));
        assert!(!seq.hero_visible());
    }

    #[test]
    fn test_teardown_mid_typing_freezes_text() {
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        seq.update(1050);
        assert_eq!(seq.hero_text(), "G");

        seq.teardown();
        assert!(!seq.update(2_000));
        assert_eq!(seq.hero_text(), "G");
        assert!(!seq.cycler().is_running());
    }

    #[test]
    fn test_event_log_records_transitions() {
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        run_until(&mut seq, 0, 1_000);
        let timeline: Vec<_> = seq.event_log().iter().map(|e| (e.at, e.event)).collect();
        assert_eq!(
            timeline,
            [
                (0, PageEvent::SplashStarted),
                (650, PageEvent::SplashComplete),
                (850, PageEvent::NavShown),
                (950, PageEvent::HeroRevealed),
            ]
        );
    }

    #[test]
    fn test_late_update_stamps_deadlines_not_frame_time() {
        let mut seq = sequencer(&[100.0]);
        seq.start(0);
        seq.update(5_000);
        seq.teardown();

        let log = seq.event_log();
        assert_eq!(log.time_of(PageEvent::SplashComplete), Some(650));
        assert_eq!(log.span(PageEvent::SplashComplete, PageEvent::HeroRevealed), Some(300));
        assert_eq!(log.time_of(PageEvent::Closed), Some(5_000));
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let result = HomeSequencer::new(SequencerConfig::default(), ScriptedIncrements::default(), Vec::<String>::new());
        assert!(matches!(result, Err(ConfigError::EmptyPhrases)));
    }
}
