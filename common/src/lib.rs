//! Core logic for the portfolio site.
//!
//! This crate contains everything that does not depend on a particular
//! rendering host, so it can be unit-tested on its own:
//!
//! - [`splash`]: Fake load-progress simulator with a one-shot completion callback
//! - [`typewriter`]: Hero title typewriter cycling through a phrase playlist
//! - [`sequencer`]: Splash-then-hero ordering, scroll lock and reveal delays
//! - [`timer`]: Component-owned timer handle driven by host time
//! - [`increments`]: Injectable random source for splash increments
//! - [`config`]: Reference timings and config structs
//! - [`catalog`]: Project records, gallery filters, detail lookup
//! - [`contact`]: Contact form validation and mail hand-off
//! - [`toast`]: Self-dismissing notifications
//! - [`sections`]: Navigation sections
//! - [`event_log`]: Timestamped page transitions for the debug overlay
//! - [`colors`], [`styles`], [`widgets`]: embedded-graphics drawing helpers
//!
//! # Time
//!
//! Nothing in this crate reads a clock. Hosts pass the current time as
//! [`Millis`] into each `update(now)` call, which keeps every controller
//! deterministic under test.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod catalog;
pub mod colors;
pub mod config;
pub mod contact;
pub mod error;
pub mod event_log;
pub mod increments;
pub mod sections;
pub mod sequencer;
pub mod splash;
pub mod styles;
pub mod timer;
pub mod toast;
pub mod typewriter;
pub mod widgets;

// Re-export commonly used items
pub use error::{CatalogError, ConfigError, ContactError};
pub use sections::Section;
pub use sequencer::{HomeSequencer, Stage};
pub use splash::{SplashPhase, SplashProgress};
pub use timer::{Millis, Timer};
pub use typewriter::{CyclerPhase, TextCycler};
