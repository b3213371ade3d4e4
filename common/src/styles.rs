//! Pre-computed text styles.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder` are const fn in
//! embedded-graphics 0.8, so every style here is built at compile time.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13, FONT_10X20};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};

use crate::colors::{GRAY, PRIMARY_600, PRIMARY_700, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Splash status, hero lines, toasts.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Gallery list and debug overlay.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Glyph Metrics
// =============================================================================

/// Width of one body-font glyph, for cursor placement.
pub const BODY_CHAR_WIDTH: i32 = 7;

/// Width of one title-font glyph.
pub const TITLE_CHAR_WIDTH: i32 = 10;

// =============================================================================
// Text Styles
// =============================================================================

/// Section and hero headings.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, PRIMARY_700);

/// Regular body copy.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, PRIMARY_600);

/// Small muted labels (percentages, debug lines).
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// White text on colored fills.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
