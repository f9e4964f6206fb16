use log::Level;

/// Id of the element the app mounts into (see index.html).
pub const ROOT_ELEMENT_ID: &str = "root";

/// localStorage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Pixels added to the scroll position before comparing section offsets.
pub const LOOKAHEAD_PX: f64 = 100.0;

/// Height of the fixed header that covers the top of every section.
pub const HEADER_HEIGHT_PX: f64 = 80.0;

/// The back-to-top control shows once the page is scrolled past this.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// Delay before checking for an empty mount after a hash change.
pub const HASH_RECHECK_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub lookahead: f64,
    pub header_height: f64,
    pub back_to_top_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead: LOOKAHEAD_PX,
            header_height: HEADER_HEIGHT_PX,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
