//! Transient notifications with time-based expiration.
//!
//! One toast is visible at a time; showing a new one replaces the current
//! one. Toasts dismiss themselves once their duration has elapsed or when
//! the visitor presses the close button.

use embedded_graphics::pixelcolor::Rgb565;
use tracing::debug;

use crate::colors::{ERROR_RED, PRIMARY_600, SUCCESS_GREEN};
use crate::timer::Millis;

/// Toast flavour, selects icon and accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Accent color for the toast border and icon.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Success => SUCCESS_GREEN,
            Self::Error => ERROR_RED,
            Self::Info => PRIMARY_600,
        }
    }
}

/// A visible notification and the moment it appeared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Millis,
    pub duration: Millis,
}

impl Toast {
    /// Check if this toast has expired.
    #[inline]
    pub const fn is_expired(
        &self,
        now: Millis,
    ) -> bool {
        now.saturating_sub(self.shown_at) >= self.duration
    }
}

/// Holds at most one toast.
#[derive(Clone, Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub const fn new() -> Self { Self { current: None } }

    /// Show a toast, replacing any visible one.
    pub fn show(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: Millis,
        duration: Millis,
    ) {
        let message = message.into();
        debug!(?kind, %message, duration, "toast shown");
        self.current = Some(Toast {
            kind,
            message,
            shown_at: now,
            duration,
        });
    }

    /// Dismiss an expired toast. Returns `true` if one was dismissed.
    pub fn update(
        &mut self,
        now: Millis,
    ) -> bool {
        if let Some(toast) = &self.current
            && toast.is_expired(now)
        {
            self.current = None;
            debug!("toast expired");
            return true;
        }
        false
    }

    /// Close button.
    pub fn dismiss(&mut self) { self.current = None; }

    #[inline]
    pub const fn current(&self) -> Option<&Toast> { self.current.as_ref() }
}

// =============================================================================
// Unit Tests
// =============================================================================
