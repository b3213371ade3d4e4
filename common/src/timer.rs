//! Component-owned timer handle.
//!
//! Controllers never read a clock. The host passes the current time into
//! `update(now)` and each controller keeps a [`Timer`] holding the deadline
//! of its next scheduled step. Cancelling a controller means cancelling its
//! timers, after which nothing it owns can fire again.
//!
//! # Catch-up
//!
//! A host may poll late (a dropped frame, a slow machine). [`Timer::poll`]
//! reports one deadline per call and the owner re-arms relative to the
//! deadline that fired, not to `now`:
//!
//! ```text
//! while timer.poll(now) {
//!     step();
//!     if !timer.arm_next(period) {
//!         break;
//!     }
//! }
//! ```
//!
//! This keeps the produced step sequence identical no matter how often the
//! host calls in. A deadline past `Millis::MAX` is never armed, so the loop
//! ends even for a clock at the end of its range.

/// Milliseconds since an arbitrary host-chosen epoch.
pub type Millis = u64;

/// A single pending deadline, or nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    due: Option<Millis>,
    last_fired: Millis,
}

impl Timer {
    /// Create a disarmed timer.
    pub const fn new() -> Self {
        Self {
            due: None,
            last_fired: 0,
        }
    }

    /// Schedule the next firing at an absolute time.
    #[inline]
    pub const fn arm_at(
        &mut self,
        due: Millis,
    ) {
        self.due = Some(due);
    }

    /// Schedule the next firing `delay` after `now`.
    #[inline]
    pub const fn arm_after(
        &mut self,
        now: Millis,
        delay: Millis,
    ) {
        self.arm_at(now.saturating_add(delay));
    }

    /// Schedule the next firing `period` after the deadline that last fired.
    ///
    /// Returns `false` and stays disarmed if that deadline is not
    /// representable.
    #[inline]
    pub const fn arm_next(
        &mut self,
        period: Millis,
    ) -> bool {
        match self.last_fired.checked_add(period) {
            Some(due) => {
                self.due = Some(due);
                true
            }
            None => {
                self.due = None;
                false
            }
        }
    }

    /// Drop the pending deadline, if any.
    #[inline]
    pub const fn cancel(&mut self) { self.due = None; }

    #[inline]
    pub const fn is_armed(&self) -> bool { self.due.is_some() }

    /// Pending deadline.
    #[inline]
    pub const fn due(&self) -> Option<Millis> { self.due }

    /// Deadline of the most recent firing.
    #[inline]
    pub const fn last_fired(&self) -> Millis { self.last_fired }

    /// Fire if the deadline has passed.
    ///
    /// Returns `true` at most once per armed deadline; firing disarms the
    /// timer until the owner re-arms it.
    pub const fn poll(
        &mut self,
        now: Millis,
    ) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                self.last_fired = due;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
