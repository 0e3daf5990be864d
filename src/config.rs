use log::Level;

/// A section becomes active this many pixels before its top reaches the viewport top.
pub const ACTIVE_SECTION_LEAD_PX: f64 = 100.0;

pub const HEADER_SOLID_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Hero moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.3;

pub const LOAD_DELAY_MS: u32 = 100;

pub const CURSOR_SIZE_PX: u32 = 20;
pub const CURSOR_HOVER_SIZE_PX: u32 = 50;

/// Elements that grow the cursor follower while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// Navigable sections in display order. Each id doubles as the DOM id of its `<section>`.
pub const SECTION_IDS: [&str; 3] = ["about", "projects", "contact"];

pub const DEFAULT_SECTION: &str = "about";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
