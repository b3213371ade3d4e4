//! Splash screen: status line, progress bar and orbiting code glyphs.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │        {                  }          │
//! │          Loading portfolio...        │
//! │   <  ▕██████████░░░░░░░░░░▏   >      │
//! │            Loading...  42%           │
//! │        /                  \          │
//! └──────────────────────────────────────┘
//! ```

use core::f32::consts::PI;
use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use portfolio_common::Millis;
use portfolio_common::colors::{PRIMARY_50, PRIMARY_300};
use portfolio_common::styles::{BODY_STYLE, CENTERED, TITLE_STYLE};
use portfolio_common::widgets::draw_progress_bar;

use super::{CENTER_X, CENTER_Y};

const STATUS_POS: Point = Point::new(CENTER_X, CENTER_Y - 40);
const PERCENT_POS: Point = Point::new(CENTER_X, CENTER_Y + 30);
const BAR_SIZE: Size = Size::new(240, 8);
const BAR_POS: Point = Point::new(CENTER_X - 120, CENTER_Y);

const GLYPHS: [char; 8] = ['{', '}', '<', '>', '/', '\\', '(', ')'];
const GLYPH_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, PRIMARY_300);
const ORBIT_RADIUS: f32 = 130.0;
const ORBIT_PERIOD_MS: Millis = 3000;
const GLYPH_STAGGER_MS: Millis = 200;

/// Draw one splash frame at `percent` (0-100).
pub fn draw_splash_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    percent: u8,
    now: Millis,
) {
    display.clear(PRIMARY_50).ok();
    draw_glyphs(display, now);

    Text::with_text_style("Loading portfolio...", STATUS_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    draw_progress_bar(display, BAR_POS, BAR_SIZE, percent);

    let mut label: String<24> = String::new();
    let _ = write!(label, "Loading... {percent}%");
    Text::with_text_style(&label, PERCENT_POS, BODY_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Glyphs fly out from the center along fixed 45° spokes and fade back.
fn draw_glyphs(
    display: &mut SimulatorDisplay<Rgb565>,
    now: Millis,
) {
    for (i, glyph) in GLYPHS.iter().enumerate() {
        let local = now.saturating_sub(i as Millis * GLYPH_STAGGER_MS) % ORBIT_PERIOD_MS;
        // 0 → 1 → 0 over one period, eased with a sine.
        let phase = (local as f32 / ORBIT_PERIOD_MS as f32 * PI).sin();
        let angle = (i as f32 * 45.0).to_radians();
        let offset = Point::new(
            (angle.sin() * ORBIT_RADIUS * phase) as i32,
            (angle.cos() * ORBIT_RADIUS * phase * 0.6) as i32,
        );
        if phase < 0.15 {
            continue;
        }

        let mut buf = [0u8; 4];
        Text::with_text_style(glyph.encode_utf8(&mut buf), Point::new(CENTER_X, CENTER_Y) + offset, GLYPH_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
}
