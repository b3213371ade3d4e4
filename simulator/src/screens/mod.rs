//! Screen modules for the splash, the page sections, the project detail
//! page and the debug overlay.

mod debug;
mod detail;
mod gallery;
mod home;
mod splash;

use embedded_graphics::prelude::*;

pub use debug::{DebugStatus, draw_debug_overlay};
pub use detail::draw_detail;
pub use gallery::draw_gallery;
pub use home::{clear_page, draw_home, draw_nav_bar, draw_text_page};
pub use splash::draw_splash_screen;

/// Simulated viewport width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Simulated viewport height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

pub const SCREEN_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Height of the navigation bar once it has slid in.
pub const NAV_HEIGHT: u32 = 24;
