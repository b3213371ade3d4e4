//! Typewriter effect for the hero title.
//!
//! Cycles through a fixed playlist of phrases forever, typing each one a
//! character at a time, holding it, then erasing it a character at a time
//! before moving on to the next phrase.
//!
//! # Phases
//!
//! ```text
//! Typing ──(prefix complete)──▶ Paused ──(pause elapsed)──▶ Deleting
//!   ▲                                                          │
//!   └──────────────(prefix empty, index + 1 mod N)─────────────┘
//! ```
//!
//! There is no terminal phase; only [`TextCycler::teardown`] stops it.
//!
//! # Timing
//!
//! A single timer drives every step. Its period depends on the phase:
//! typing steps wait `typing_ms`, deleting steps wait `deleting_ms`, and
//! the hold after a fully typed phrase waits `pause_ms`. The step that
//! notices a full (or empty) prefix is itself a tick, so with the phrase
//! `"Go"` the visible sequence is:
//!
//! ```text
//! ""  -100-▶ "G" -100-▶ "Go" -100-▶ (pause) -2000-▶ "Go" -50-▶ "G" -50-▶ "" -50-▶ (next) -100-▶ "G" ...
//! ```
//!
//! Prefix lengths count characters, so multi-byte phrases are never cut
//! inside a UTF-8 sequence.

use tracing::{debug, info};

use crate::config::CyclerConfig;
use crate::error::ConfigError;
use crate::timer::{Millis, Timer};

/// Current step of the type/hold/erase cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CyclerPhase {
    #[default]
    Typing,
    Paused,
    Deleting,
}

/// Hero title typewriter.
#[derive(Clone, Debug)]
pub struct TextCycler {
    config: CyclerConfig,
    phrases: Vec<String>,
    index: usize,
    /// Number of characters of the current phrase on screen.
    shown: usize,
    phase: CyclerPhase,
    timer: Timer,
}

impl TextCycler {
    /// Build a cycler over `phrases`, which must not be empty.
    pub fn new<I>(
        phrases: I,
        config: CyclerConfig,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        config.validate()?;
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        Ok(Self {
            config,
            phrases,
            index: 0,
            shown: 0,
            phase: CyclerPhase::Typing,
            timer: Timer::new(),
        })
    }

    /// Schedule the first typing step. Restarting a running cycler is a no-op.
    pub fn start(
        &mut self,
        now: Millis,
    ) {
        if self.timer.is_armed() {
            return;
        }
        self.timer.arm_after(now, self.period());
        info!(phrases = self.phrases.len(), "typewriter started");
    }

    /// Run every step due at `now`.
    ///
    /// Returns `true` if the displayed text changed.
    pub fn update(
        &mut self,
        now: Millis,
    ) -> bool {
        let mut changed = false;
        while self.timer.poll(now) {
            changed |= self.step();
            if !self.timer.arm_next(self.period()) {
                debug!(index = self.index, "clock exhausted, typewriter stopped");
                break;
            }
        }
        changed
    }

    /// Stop the cycle. No further step runs until [`start`](Self::start).
    pub fn teardown(&mut self) {
        if self.timer.is_armed() {
            debug!(index = self.index, phase = ?self.phase, "typewriter torn down");
        }
        self.timer.cancel();
    }

    /// Text currently on screen: a prefix of [`current_phrase`](Self::current_phrase).
    pub fn display(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase.char_indices().nth(self.shown).map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Phrase being typed or erased.
    #[inline]
    pub fn current_phrase(&self) -> &str { &self.phrases[self.index] }

    #[inline]
    pub const fn index(&self) -> usize { self.index }

    #[inline]
    pub const fn phase(&self) -> CyclerPhase { self.phase }

    #[inline]
    pub const fn is_running(&self) -> bool { self.timer.is_armed() }

    /// Delay before the next step, chosen by phase.
    const fn period(&self) -> Millis {
        match self.phase {
            CyclerPhase::Typing => self.config.typing_ms,
            CyclerPhase::Paused => self.config.pause_ms,
            CyclerPhase::Deleting => self.config.deleting_ms,
        }
    }

    fn phrase_len(&self) -> usize { self.current_phrase().chars().count() }

    fn step(&mut self) -> bool {
        match self.phase {
            CyclerPhase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                    true
                } else {
                    self.phase = CyclerPhase::Paused;
                    debug!(index = self.index, "phrase typed, holding");
                    false
                }
            }
            CyclerPhase::Paused => {
                self.phase = CyclerPhase::Deleting;
                false
            }
            CyclerPhase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    true
                } else {
                    self.phase = CyclerPhase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                    debug!(index = self.index, "next phrase");
                    false
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
