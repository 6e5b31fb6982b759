//! Browser console logging.
//!
//! Records from both crates go through `console_log` to the matching
//! `console` method. The backend is installed once at `Trace`; the visible
//! level is controlled with `log::set_max_level`.

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

/// Parse a level name ("error", "warn", "info", "debug", "trace", "off").
///
/// Unknown names fall back to `Info`.
pub(crate) fn level_from_str(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger and set the initial level.
pub(crate) fn init(level: LevelFilter) {
    if let Err(e) = console_log::init_with_level(Level::Trace) {
        log::warn!("console logger not installed: {}", e);
    }
    log::set_max_level(level);
}

/// Change how verbose the console output is.
///
/// # Example (TypeScript)
///
/// ```typescript
/// set_log_level("debug"); // show warp/filter matrices
/// ```
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(level_from_str(level));
}
