//! Splash progress bar.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::{ACCENT_500, PRIMARY_100, PRIMARY_500};

/// Color at position `t` (0.0-1.0) of the primary-to-accent gradient.
pub fn gradient_color(t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |from: u8, to: u8| -> u8 {
        let from = f32::from(from);
        let to = f32::from(to);
        (from + (to - from) * t).round() as u8
    };
    Rgb565::new(
        lerp(PRIMARY_500.r(), ACCENT_500.r()),
        lerp(PRIMARY_500.g(), ACCENT_500.g()),
        lerp(PRIMARY_500.b(), ACCENT_500.b()),
    )
}

/// Draw a rounded track with a gradient fill covering `percent` of it.
pub fn draw_progress_bar<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    percent: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = Size::new(size.height / 2, size.height / 2);
    RoundedRectangle::with_equal_corners(Rectangle::new(top_left, size), radius)
        .into_styled(PrimitiveStyle::with_fill(PRIMARY_100))
        .draw(display)
        .ok();

    let filled = size.width * u32::from(percent.min(100)) / 100;
    if filled == 0 {
        return;
    }

    // One column per pixel so the gradient spans the full track width.
    for col in 0..filled {
        let t = col as f32 / size.width.max(1) as f32;
        Rectangle::new(top_left + Point::new(col as i32, 0), Size::new(1, size.height))
            .into_styled(PrimitiveStyle::with_fill(gradient_color(t)))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(0.0), PRIMARY_500);
        assert_eq!(gradient_color(1.0), ACCENT_500);
    }

    #[test]
    fn test_gradient_clamps() {
        assert_eq!(gradient_color(-3.0), PRIMARY_500);
        assert_eq!(gradient_color(7.0), ACCENT_500);
    }
}
