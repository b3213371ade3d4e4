//! Portfolio Simulator for Windows/Desktop.
//!
//! Runs the splash screen, the hero typewriter and the project gallery in an
//! SDL window using the embedded-graphics-simulator crate.
//!
//! Keys: Right = next section, D = debug overlay, X = close the toast,
//! Escape = close the lightbox, then the detail page, then the page itself.
//!
//! Projects: Up/Down = focus a card, Tab = next filter, Enter = open the
//! detail page, S = open the focused project's source, L = open the
//! lightbox, Left/Right = browse photos.
//!
//! Contact: M = send a demo message, O = toggle the mail service offline.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod outbox;
mod screens;
mod timing;

use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use portfolio_common::catalog::{Catalog, DetailView, Gallery, INTERNAL_SOURCE_NOTICE, PROJECT_NOT_FOUND, Project, SourceLink};
use portfolio_common::config::{GALLERY_TOAST_MS, HERO_PHRASES, SequencerConfig};
use portfolio_common::contact::ContactForm;
use portfolio_common::increments::RandomIncrements;
use portfolio_common::toast::{ToastKind, ToastSlot};
use portfolio_common::widgets::draw_toast;
use portfolio_common::{HomeSequencer, Millis, Section};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::outbox::LoggingOutbox;
use crate::screens::{
    DebugStatus,
    SCREEN_SIZE,
    clear_page,
    draw_debug_overlay,
    draw_detail,
    draw_gallery,
    draw_home,
    draw_nav_bar,
    draw_splash_screen,
    draw_text_page,
};
use crate::timing::{CURSOR_BLINK_MS, FRAME_TIME, HostClock};

const CATALOG_JSON: &str = include_str!("../data/projects.json");
const RECIPIENT: &str = "hello@example.com";

const ABOUT_LINES: [&str; 3] = [
    "Full stack developer building for the web.",
    "React, Next.js, Node.js, TypeScript,",
    "PostgreSQL and a soft spot for animation.",
];

const CONTACT_LINES: [&str; 3] = [
    "Press M to send a demo message.",
    "Press O to take the mail service offline.",
    "Delivered messages are logged to stdout.",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = match Catalog::from_json(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "project catalog is invalid");
            return;
        }
    };

    let config = SequencerConfig::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let sequencer = RandomIncrements::seeded(seed, &config.splash)
        .and_then(|increments| HomeSequencer::new(config, increments, HERO_PHRASES));
    let mut sequencer = match sequencer {
        Ok(sequencer) => sequencer,
        Err(e) => {
            error!(error = %e, "invalid sequencer configuration");
            return;
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(SCREEN_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Portfolio Sim", &output_settings);

    let clock = HostClock::start();
    sequencer.start(clock.now());
    info!(projects = catalog.len(), seed, "simulator started");

    // UI state
    let mut section = Section::default();
    let mut gallery = Gallery::new();
    let mut seen_generation = gallery.generation();
    let mut filter_changed_at: Millis = 0;
    let mut detail: Option<DetailView> = None;
    let mut toasts = ToastSlot::new();
    let mut outbox = LoggingOutbox::default();
    let mut show_debug = false;

    // FPS
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();
        let now = clock.now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    sequencer.teardown();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => {
                            if let Some(view) = detail.as_mut()
                                && view.lightbox().index().is_some()
                            {
                                view.lightbox_mut().close();
                            } else if detail.take().is_none() {
                                sequencer.teardown();
                                return;
                            }
                        }
                        Keycode::D => show_debug = !show_debug,
                        Keycode::X => toasts.dismiss(),

                        // Detail page and lightbox
                        Keycode::L if detail.is_some() => {
                            if let Some(view) = detail.as_mut()
                                && !view.lightbox_mut().open(0)
                            {
                                info!(id = view.project_id(), "project has no photos");
                            }
                        }
                        Keycode::Left if detail.is_some() => {
                            if let Some(view) = detail.as_mut() {
                                view.lightbox_mut().prev();
                            }
                        }
                        Keycode::Right if detail.is_some() => {
                            if let Some(view) = detail.as_mut() {
                                view.lightbox_mut().next();
                            }
                        }
                        Keycode::S if detail.is_some() => {
                            if let Some(project) = detail.as_ref().and_then(|view| view.project(&catalog).ok()) {
                                open_source(project, &mut toasts, now);
                            }
                        }

                        // Sections and gallery
                        Keycode::Right if !sequencer.scroll_locked() && sequencer.nav_visible() => {
                            section = section.next();
                            detail = None;
                            info!(anchor = section.anchor(), "navigated");
                        }
                        Keycode::Tab if section == Section::Projects => {
                            gallery.set_filter(gallery.filter().next());
                        }
                        Keycode::Down if section == Section::Projects => {
                            gallery.select_next(catalog.filtered(gallery.filter()).count());
                        }
                        Keycode::Up if section == Section::Projects => {
                            gallery.select_prev(catalog.filtered(gallery.filter()).count());
                        }
                        Keycode::Return if section == Section::Projects => {
                            if let Some(project) = gallery.selected_project(&catalog) {
                                detail = DetailView::open(&catalog, &project.id, &mut toasts, now);
                            }
                        }
                        Keycode::S if section == Section::Projects => {
                            if let Some(project) = gallery.selected_project(&catalog) {
                                open_source(project, &mut toasts, now);
                            }
                        }
                        Keycode::M if section == Section::Contact => {
                            let mut form = ContactForm {
                                name: "Demo Visitor".into(),
                                email: "visitor@example.com".into(),
                                subject: "Hello from the simulator".into(),
                                message: "Just testing the contact form.".into(),
                            };
                            if form.submit(&mut outbox, RECIPIENT, &mut toasts, now).is_ok() {
                                info!(delivered = outbox.delivered(), "demo message sent");
                            }
                        }
                        Keycode::O if section == Section::Contact => {
                            outbox.offline = !outbox.offline;
                            warn!(offline = outbox.offline, "mail service toggled");
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        sequencer.update(now);
        toasts.update(now);
        if gallery.generation() != seen_generation {
            seen_generation = gallery.generation();
            filter_changed_at = now;
        }

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        if sequencer.splash_visible() {
            draw_splash_screen(&mut display, sequencer.progress_percent(), now);
        } else {
            clear_page(&mut display);
            if sequencer.nav_visible() {
                draw_nav_bar(&mut display, section);
            }
            match section {
                Section::Home => {
                    if sequencer.hero_visible() {
                        let cursor_on = (now / CURSOR_BLINK_MS).is_multiple_of(2);
                        draw_home(&mut display, sequencer.hero_text(), cursor_on);
                    }
                }
                Section::About => draw_text_page(&mut display, "About Me", &ABOUT_LINES),
                Section::Projects => {
                    let lost = match detail.as_ref() {
                        Some(view) => match view.project(&catalog) {
                            Ok(project) => {
                                draw_detail(&mut display, project, view.lightbox());
                                false
                            }
                            Err(e) => {
                                warn!(error = %e, "detail page lost its project");
                                true
                            }
                        },
                        None => {
                            draw_gallery(&mut display, &catalog, &gallery, now.saturating_sub(filter_changed_at));
                            false
                        }
                    };
                    if lost {
                        detail = None;
                        toasts.show(ToastKind::Error, PROJECT_NOT_FOUND, now, GALLERY_TOAST_MS);
                    }
                }
                Section::Contact => draw_text_page(&mut display, "Get In Touch", &CONTACT_LINES),
            }
        }

        if let Some(toast) = toasts.current() {
            draw_toast(&mut display, SCREEN_SIZE, toast);
        }

        if show_debug {
            let status = DebugStatus {
                stage: sequencer.stage(),
                percent: sequencer.progress_percent(),
                splash: sequencer.splash_phase(),
                splash_pending: sequencer.splash_pending(),
                phase: sequencer.cycler().phase(),
                typing: sequencer.cycler().is_running(),
                phrase_index: sequencer.cycler().index(),
                fps: current_fps,
            };
            draw_debug_overlay(&mut display, status, sequencer.event_log());
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Log a public repository link, or explain why an internal one is closed.
fn open_source(
    project: &Project,
    toasts: &mut ToastSlot,
    now: Millis,
) {
    match project.source_link() {
        SourceLink::Public(url) => info!(id = %project.id, %url, "opening repository"),
        SourceLink::Internal => toasts.show(ToastKind::Info, INTERNAL_SOURCE_NOTICE, now, GALLERY_TOAST_MS),
    }
}
