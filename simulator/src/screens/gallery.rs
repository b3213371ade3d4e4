//! Projects section: featured strip, filter buttons and the filtered list.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use portfolio_common::Millis;
use portfolio_common::catalog::{CARD_TECH_LIMIT, Catalog, CategoryFilter, Gallery, SourceLink};
use portfolio_common::colors::{ACCENT_500, PRIMARY_50, PRIMARY_100};
use portfolio_common::styles::{BODY_STYLE, CENTERED, LABEL_STYLE, LABEL_STYLE_WHITE, LEFT_ALIGNED, TITLE_STYLE};

use super::{CENTER_X, NAV_HEIGHT, SCREEN_WIDTH};

const HEADING_POS: Point = Point::new(CENTER_X, NAV_HEIGHT as i32 + 20);
const FEATURED_Y: i32 = NAV_HEIGHT as i32 + 38;
const FILTER_Y: i32 = NAV_HEIGHT as i32 + 46;
const FILTER_HEIGHT: u32 = 16;
const LIST_X: i32 = 16;
const LIST_Y: i32 = FILTER_Y + 34;
const ROW_HEIGHT: i32 = 30;

/// Delay between two cards appearing after a filter click.
const ROW_STAGGER_MS: Millis = 60;

/// Draw the gallery. `since_filter` is the time since the last filter click
/// and drives the staggered card entrance.
pub fn draw_gallery(
    display: &mut SimulatorDisplay<Rgb565>,
    catalog: &Catalog,
    gallery: &Gallery,
    since_filter: Millis,
) {
    Text::with_text_style("My Projects", HEADING_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    draw_featured_strip(display, catalog);
    draw_filter_buttons(display, gallery.filter());

    for (row, project) in catalog.filtered(gallery.filter()).enumerate() {
        if since_filter < row as Millis * ROW_STAGGER_MS {
            break;
        }
        let y = LIST_Y + row as i32 * ROW_HEIGHT;

        if row == gallery.selected() {
            Rectangle::new(Point::new(LIST_X - 8, y - 11), Size::new(SCREEN_WIDTH - 16, ROW_HEIGHT as u32 - 2))
                .into_styled(PrimitiveStyle::with_fill(PRIMARY_50))
                .draw(display)
                .ok();
        }

        let mut heading: String<64> = String::new();
        let marker = if row == gallery.selected() { ">" } else { " " };
        let _ = write!(heading, "{marker} {} [{}]", project.title, project.category.label());
        Text::with_text_style(&heading, Point::new(LIST_X, y), BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let (shown, hidden) = project.tech_preview(CARD_TECH_LIMIT);
        let mut badges: String<96> = String::new();
        for tech in shown {
            let _ = write!(badges, "{tech}  ");
        }
        if hidden > 0 {
            let _ = write!(badges, "+{hidden}");
        }
        if project.source_link() == SourceLink::Internal {
            let _ = write!(badges, "  (internal)");
        }
        Text::with_text_style(&badges, Point::new(LIST_X + 14, y + 12), LABEL_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_featured_strip(
    display: &mut SimulatorDisplay<Rgb565>,
    catalog: &Catalog,
) {
    let mut strip: String<96> = String::new();
    let _ = write!(strip, "Featured:");
    for project in catalog.featured() {
        if write!(strip, "  * {}", project.title).is_err() {
            break;
        }
    }
    Text::with_text_style(&strip, Point::new(LIST_X, FEATURED_Y), LABEL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_filter_buttons(
    display: &mut SimulatorDisplay<Rgb565>,
    active: CategoryFilter,
) {
    let slot = SCREEN_WIDTH as i32 / CategoryFilter::ALL.len() as i32;
    for (i, filter) in CategoryFilter::ALL.iter().enumerate() {
        let x = slot * i as i32;
        let fill = if *filter == active { ACCENT_500 } else { PRIMARY_100 };
        Rectangle::new(Point::new(x + 6, FILTER_Y), Size::new(slot as u32 - 12, FILTER_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)
            .ok();

        let style = if *filter == active { LABEL_STYLE_WHITE } else { LABEL_STYLE };
        Text::with_text_style(filter.label(), Point::new(x + slot / 2, FILTER_Y + 11), style, CENTERED)
            .draw(display)
            .ok();
    }
}
