//! Home section: navigation bar and hero with the typewriter title.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use portfolio_common::Section;
use portfolio_common::colors::{ACCENT_500, GRAY, PRIMARY_100, PRIMARY_500, WHITE};
use portfolio_common::styles::{BODY_STYLE, CENTERED, LABEL_STYLE, TITLE_CHAR_WIDTH, TITLE_STYLE};
use profont::PROFONT_24_POINT;

use super::{CENTER_X, NAV_HEIGHT, SCREEN_WIDTH};

const GREETING_POS: Point = Point::new(CENTER_X, 90);
const NAME_POS: Point = Point::new(CENTER_X, 125);
const TITLE_Y: i32 = 165;
const DESCRIPTION_Y: i32 = 205;
const DESCRIPTION_LINE_HEIGHT: i32 = 16;

const NAME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, ACCENT_500);
const NAV_ACTIVE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&embedded_graphics::mono_font::ascii::FONT_6X10, ACCENT_500);

const DESCRIPTION: [&str; 2] = [
    "I build modern and interactive web applications",
    "with React, Next.js, Node.js and friends.",
];

/// Draw the hero. `title` is the typewriter text, drawn with a cursor.
pub fn draw_home(
    display: &mut SimulatorDisplay<Rgb565>,
    title: &str,
    cursor_on: bool,
) {
    Text::with_text_style("Hello, I'm", GREETING_POS, BODY_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Cirstea Eduard", NAME_POS, NAME_STYLE, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(title, Point::new(CENTER_X, TITLE_Y), TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    if cursor_on {
        let half_width = title.chars().count() as i32 * TITLE_CHAR_WIDTH / 2;
        let x = CENTER_X + half_width + 2;
        Line::new(Point::new(x, TITLE_Y - 14), Point::new(x, TITLE_Y + 2))
            .into_styled(PrimitiveStyle::with_stroke(PRIMARY_500, 2))
            .draw(display)
            .ok();
    }

    for (i, line) in DESCRIPTION.iter().enumerate() {
        let pos = Point::new(CENTER_X, DESCRIPTION_Y + i as i32 * DESCRIPTION_LINE_HEIGHT);
        Text::with_text_style(line, pos, BODY_STYLE, CENTERED).draw(display).ok();
    }
}

/// Draw the navigation bar with `active` highlighted.
pub fn draw_nav_bar(
    display: &mut SimulatorDisplay<Rgb565>,
    active: Section,
) {
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, NAV_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(PRIMARY_100))
        .draw(display)
        .ok();
    Line::new(Point::new(0, NAV_HEIGHT as i32), Point::new(SCREEN_WIDTH as i32, NAV_HEIGHT as i32))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    let slot = SCREEN_WIDTH as i32 / Section::ALL.len() as i32;
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active { NAV_ACTIVE_STYLE } else { LABEL_STYLE };
        let pos = Point::new(slot * i as i32 + slot / 2, 15);
        Text::with_text_style(section.label(), pos, style, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Clear to the page background.
pub fn clear_page(display: &mut SimulatorDisplay<Rgb565>) { display.clear(WHITE).ok(); }

/// Heading plus a few centered body lines, for the About and Contact sections.
pub fn draw_text_page(
    display: &mut SimulatorDisplay<Rgb565>,
    heading: &str,
    lines: &[&str],
) {
    let top = NAV_HEIGHT as i32 + 40;
    Text::with_text_style(heading, Point::new(CENTER_X, top), TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    for (i, line) in lines.iter().enumerate() {
        let pos = Point::new(CENTER_X, top + 36 + i as i32 * DESCRIPTION_LINE_HEIGHT);
        Text::with_text_style(line, pos, BODY_STYLE, CENTERED).draw(display).ok();
    }
}
