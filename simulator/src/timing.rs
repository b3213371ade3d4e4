//! Frame pacing and the host clock.
//!
//! The controllers in `portfolio_common` take time as plain milliseconds;
//! this module is where the simulator turns `std::time::Instant` into that.

use std::time::{Duration, Instant};

use portfolio_common::Millis;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Half-period of the hero cursor blink.
pub const CURSOR_BLINK_MS: Millis = 500;

/// Milliseconds elapsed since the simulator launched.
#[derive(Clone, Copy, Debug)]
pub struct HostClock {
    epoch: Instant,
}

impl HostClock {
    pub fn start() -> Self { Self { epoch: Instant::now() } }

    /// Current host time in milliseconds.
    pub fn now(&self) -> Millis { Millis::try_from(self.epoch.elapsed().as_millis()).unwrap_or(Millis::MAX) }
}
