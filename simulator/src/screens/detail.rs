//! Project detail page and its photo lightbox.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use portfolio_common::catalog::{Lightbox, Project};
use portfolio_common::colors::PRIMARY_700;
use portfolio_common::styles::{
    BODY_CHAR_WIDTH,
    BODY_STYLE,
    CENTERED,
    LABEL_STYLE,
    LABEL_STYLE_WHITE,
    LEFT_ALIGNED,
    TITLE_STYLE,
};
use portfolio_common::widgets::{fit_chars, wrap_lines};

use super::{CENTER_X, CENTER_Y, NAV_HEIGHT, SCREEN_WIDTH};

const MARGIN: i32 = 16;
const TITLE_POS: Point = Point::new(CENTER_X, NAV_HEIGHT as i32 + 22);
const CATEGORY_POS: Point = Point::new(CENTER_X, NAV_HEIGHT as i32 + 36);
const BODY_TOP: i32 = NAV_HEIGHT as i32 + 58;
const LINE_HEIGHT: i32 = 14;
const MAX_DESCRIPTION_LINES: usize = 4;
const MAX_FEATURES: usize = 4;
const LIGHTBOX_SIZE: Size = Size::new(360, 110);

/// Characters of body text per line inside the margins.
const LINE_CHARS: usize = ((SCREEN_WIDTH as i32 - 2 * MARGIN) / BODY_CHAR_WIDTH) as usize;

/// Draw the detail page for `project`, with the lightbox on top when open.
pub fn draw_detail(
    display: &mut SimulatorDisplay<Rgb565>,
    project: &Project,
    lightbox: &Lightbox,
) {
    Text::with_text_style(fit_chars(&project.title, 40), TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(project.category.label(), CATEGORY_POS, LABEL_STYLE, CENTERED)
        .draw(display)
        .ok();

    let mut y = BODY_TOP;
    let description = project.long_description.as_deref().unwrap_or(project.description.as_str());
    for line in wrap_lines(description, LINE_CHARS).into_iter().take(MAX_DESCRIPTION_LINES) {
        draw_line(display, line, y);
        y += LINE_HEIGHT;
    }

    if !project.features.is_empty() {
        y += 4;
        for feature in project.features.iter().take(MAX_FEATURES) {
            let mut bullet: String<72> = String::new();
            let _ = write!(bullet, "- {}", fit_chars(feature, LINE_CHARS - 2));
            draw_line(display, &bullet, y);
            y += LINE_HEIGHT;
        }
    }

    y += 4;
    let mut tech: String<96> = String::new();
    let _ = write!(tech, "Tech:");
    for name in &project.technologies {
        if write!(tech, " {name}").is_err() {
            break;
        }
    }
    draw_label(display, &tech, y);
    y += LINE_HEIGHT;

    let mut demo: String<96> = String::new();
    if project.demo.trim().is_empty() {
        let _ = write!(demo, "Live demo: not available");
    } else {
        let _ = write!(demo, "Live demo: {}", fit_chars(project.demo.trim(), 60));
    }
    draw_label(display, &demo, y);
    y += LINE_HEIGHT;

    if !project.image.trim().is_empty() {
        let mut cover: String<80> = String::new();
        let _ = write!(cover, "Cover: {}", fit_chars(project.image.trim(), 60));
        draw_label(display, &cover, y);
        y += LINE_HEIGHT;
    }

    let mut photos: String<48> = String::new();
    match project.photos.len() {
        0 => {
            let _ = write!(photos, "No photos");
        }
        n => {
            let _ = write!(photos, "{n} photo(s), L to view");
        }
    }
    draw_label(display, &photos, y);

    if let Some(index) = lightbox.index()
        && let Some(photo) = project.photos.get(index)
    {
        draw_lightbox(display, photo, index, project.photos.len());
    }
}

fn draw_lightbox(
    display: &mut SimulatorDisplay<Rgb565>,
    photo: &str,
    index: usize,
    count: usize,
) {
    let top_left = Point::new(CENTER_X - LIGHTBOX_SIZE.width as i32 / 2, CENTER_Y - LIGHTBOX_SIZE.height as i32 / 2);
    Rectangle::new(top_left, LIGHTBOX_SIZE)
        .into_styled(PrimitiveStyle::with_fill(PRIMARY_700))
        .draw(display)
        .ok();

    let mut counter: String<24> = String::new();
    let _ = write!(counter, "Photo {} / {count}", index + 1);
    Text::with_text_style(&counter, Point::new(CENTER_X, top_left.y + 30), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(fit_chars(photo, 56), Point::new(CENTER_X, top_left.y + 56), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        "Left/Right: browse   Esc: close",
        Point::new(CENTER_X, top_left.y + 90),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}

fn draw_line(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
    y: i32,
) {
    Text::with_text_style(text, Point::new(MARGIN, y), BODY_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_label(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
    y: i32,
) {
    Text::with_text_style(text, Point::new(MARGIN, y), LABEL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
