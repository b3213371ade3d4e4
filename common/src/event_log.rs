//! Timeline of home-page transitions for the debug overlay.
//!
//! The sequencer records each stage change together with the host time it
//! happened at (the deadline that fired, not the frame that noticed it).
//! `tracing` carries the same events to the terminal; this buffer is what
//! the simulator draws on top of the page.

use heapless::Deque;

use crate::timer::Millis;

/// Number of entries kept; older ones are dropped.
pub const EVENT_LOG_SIZE: usize = 8;

/// Something the home page did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    SplashStarted,
    SplashComplete,
    NavShown,
    HeroRevealed,
    Closed,
}

impl PageEvent {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SplashStarted => "Splash started",
            Self::SplashComplete => "Splash complete",
            Self::NavShown => "Navigation shown",
            Self::HeroRevealed => "Hero revealed",
            Self::Closed => "Page closed",
        }
    }
}

/// One recorded transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub at: Millis,
    pub event: PageEvent,
}

/// Fixed-capacity timeline, oldest entry first.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Deque<LogEntry, EVENT_LOG_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { entries: Deque::new() } }

    /// Append `event` at `at`, evicting the oldest entry when full.
    pub fn record(
        &mut self,
        at: Millis,
        event: PageEvent,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { at, event }).ok();
    }

    /// Most recent time `event` was recorded.
    pub fn time_of(
        &self,
        event: PageEvent,
    ) -> Option<Millis> {
        self.entries.iter().rev().find(|e| e.event == event).map(|e| e.at)
    }

    /// Time between two recorded events, if both are present in order.
    pub fn span(
        &self,
        from: PageEvent,
        to: PageEvent,
    ) -> Option<Millis> {
        self.time_of(to)?.checked_sub(self.time_of(from)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut log = EventLog::new();
        log.record(0, PageEvent::SplashStarted);
        log.record(950, PageEvent::SplashComplete);

        let events: Vec<_> = log.iter().map(|e| (e.at, e.event)).collect();
        assert_eq!(events, [(0, PageEvent::SplashStarted), (950, PageEvent::SplashComplete)]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_full_log_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..EVENT_LOG_SIZE as Millis + 2 {
            log.record(i * 10, PageEvent::NavShown);
        }
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert_eq!(log.iter().next().map(|e| e.at), Some(20));
    }

    #[test]
    fn test_time_of_returns_latest() {
        let mut log = EventLog::new();
        log.record(100, PageEvent::NavShown);
        log.record(400, PageEvent::NavShown);
        assert_eq!(log.time_of(PageEvent::NavShown), Some(400));
        assert_eq!(log.time_of(PageEvent::Closed), None);
    }

    #[test]
    fn test_span_between_events() {
        let mut log = EventLog::new();
        log.record(650, PageEvent::SplashComplete);
        log.record(950, PageEvent::HeroRevealed);
        assert_eq!(log.span(PageEvent::SplashComplete, PageEvent::HeroRevealed), Some(300));
        assert_eq!(log.span(PageEvent::HeroRevealed, PageEvent::SplashComplete), None);
        assert_eq!(log.span(PageEvent::SplashStarted, PageEvent::HeroRevealed), None);
    }

    #[test]
    fn test_labels_fit_overlay_line() {
        for event in [
            PageEvent::SplashStarted,
            PageEvent::SplashComplete,
            PageEvent::NavShown,
            PageEvent::HeroRevealed,
            PageEvent::Closed,
        ] {
            assert!(event.label().len() <= 24, "{event:?}");
        }
    }
}
