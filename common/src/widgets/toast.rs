//! Toast overlay, anchored to the bottom of the screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::WHITE;
use crate::styles::{BODY_CHAR_WIDTH, BODY_STYLE, CENTERED};
use crate::toast::Toast;
use crate::widgets::fit_chars;

const TOAST_HEIGHT: u32 = 28;
const TOAST_MARGIN: i32 = 8;
const BORDER: u32 = 2;

/// Draw `toast` centered near the bottom edge of a `screen`-sized target.
///
/// Messages wider than the screen are cut to fit.
pub fn draw_toast<D>(
    display: &mut D,
    screen: Size,
    toast: &Toast,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let width = screen.width.saturating_sub(2 * TOAST_MARGIN as u32);
    let top_left = Point::new(TOAST_MARGIN, screen.height as i32 - TOAST_HEIGHT as i32 - TOAST_MARGIN);

    Rectangle::new(top_left, Size::new(width, TOAST_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(toast.kind.color()))
        .draw(display)
        .ok();
    Rectangle::new(
        top_left + Point::new(BORDER as i32, BORDER as i32),
        Size::new(width.saturating_sub(2 * BORDER), TOAST_HEIGHT - 2 * BORDER),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(display)
    .ok();

    let max_chars = (width as i32 / BODY_CHAR_WIDTH).max(0) as usize;
    let center = top_left + Point::new(width as i32 / 2, TOAST_HEIGHT as i32 / 2 + 4);
    Text::with_text_style(fit_chars(&toast.message, max_chars), center, BODY_STYLE, CENTERED)
        .draw(display)
        .ok();
}
