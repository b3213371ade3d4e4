//! Color palette for the portfolio views.
//!
//! The site uses a pink "primary" ramp with a rose accent. The values here
//! are the closest RGB565 equivalents, for hosts that draw with
//! `embedded-graphics`.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white. Page background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black.
pub const BLACK: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Primary Ramp
// =============================================================================

/// Lightest tint, splash gradient end.
pub const PRIMARY_50: Rgb565 = Rgb565::new(31, 61, 31);

/// Progress track and soft panels.
pub const PRIMARY_100: Rgb565 = Rgb565::new(31, 57, 30);

/// Floating splash glyphs.
pub const PRIMARY_300: Rgb565 = Rgb565::new(30, 42, 26);

/// Progress bar start, cursor.
pub const PRIMARY_500: Rgb565 = Rgb565::new(29, 28, 22);

/// Secondary text, info toasts.
pub const PRIMARY_600: Rgb565 = Rgb565::new(27, 18, 18);

/// Headings and the hero title.
pub const PRIMARY_700: Rgb565 = Rgb565::new(23, 12, 14);

// =============================================================================
// Accent and Status
// =============================================================================

/// Progress bar end, hover highlight.
pub const ACCENT_500: Rgb565 = Rgb565::new(30, 15, 12);

/// Success toast accent.
pub const SUCCESS_GREEN: Rgb565 = Rgb565::new(4, 48, 10);

/// Error toast accent.
pub const ERROR_RED: Rgb565 = Rgb565::new(28, 10, 8);

/// Divider lines and muted labels.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
