//! Drawing helpers for the portfolio views.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so any
//! embedded-graphics host can render them.

mod progress;
mod text;
mod toast;

pub use progress::{draw_progress_bar, gradient_color};
pub use text::{fit_chars, wrap_lines};
pub use toast::draw_toast;
