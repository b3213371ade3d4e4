//! Debug overlay: stage, progress and the page timeline.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use portfolio_common::colors::BLACK;
use portfolio_common::event_log::{EVENT_LOG_SIZE, EventLog, PageEvent};
use portfolio_common::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED};
use portfolio_common::{CyclerPhase, SplashPhase, Stage};

use super::SCREEN_HEIGHT;

const PANEL_WIDTH: u32 = 220;
const LINE_HEIGHT: i32 = 12;
const PANEL_HEIGHT: u32 = (LINE_HEIGHT as u32) * (EVENT_LOG_SIZE as u32 + 5) + 8;
const PANEL_POS: Point = Point::new(4, SCREEN_HEIGHT as i32 - PANEL_HEIGHT as i32 - 44);

/// Snapshot of the sequencer shown in the overlay header.
#[derive(Clone, Copy, Debug)]
pub struct DebugStatus {
    pub stage: Stage,
    pub percent: u8,
    pub splash: SplashPhase,
    pub splash_pending: bool,
    pub phase: CyclerPhase,
    pub typing: bool,
    pub phrase_index: usize,
    pub fps: f32,
}

pub fn draw_debug_overlay(
    display: &mut SimulatorDisplay<Rgb565>,
    status: DebugStatus,
    log: &EventLog,
) {
    Rectangle::new(PANEL_POS, Size::new(PANEL_WIDTH, PANEL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let x = PANEL_POS.x + 4;
    let mut y = PANEL_POS.y + 12;

    let mut header: String<64> = String::new();
    let _ = write!(header, "{:?} {}%  {:.0} FPS", status.stage, status.percent, status.fps);
    draw_line(display, &header, x, y);
    y += LINE_HEIGHT;

    let mut splash: String<64> = String::new();
    let timers = if status.splash_pending { "armed" } else { "idle" };
    let _ = write!(splash, "splash: {:?}, timers {timers}", status.splash);
    draw_line(display, &splash, x, y);
    y += LINE_HEIGHT;

    let mut cycler: String<64> = String::new();
    let state = if status.typing { "" } else { " (stopped)" };
    let _ = write!(cycler, "typewriter: {:?} #{}{state}", status.phase, status.phrase_index);
    draw_line(display, &cycler, x, y);
    y += LINE_HEIGHT;

    let mut reveal: String<48> = String::new();
    match log.span(PageEvent::SplashComplete, PageEvent::HeroRevealed) {
        Some(ms) => {
            let _ = write!(reveal, "splash -> hero: {ms} ms");
        }
        None => {
            let _ = write!(reveal, "splash -> hero: pending");
        }
    }
    draw_line(display, &reveal, x, y);
    y += LINE_HEIGHT;

    let mut title: String<32> = String::new();
    if log.is_empty() {
        let _ = write!(title, "timeline: empty");
    } else {
        let _ = write!(title, "timeline ({}/{EVENT_LOG_SIZE}):", log.len());
    }
    draw_line(display, &title, x, y);
    y += LINE_HEIGHT;

    for entry in log.iter() {
        let mut line: String<48> = String::new();
        let _ = write!(line, "{:>7} {}", entry.at, entry.event.label());
        draw_line(display, &line, x, y);
        y += LINE_HEIGHT;
    }
}

fn draw_line(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
    x: i32,
    y: i32,
) {
    Text::with_text_style(text, Point::new(x, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
