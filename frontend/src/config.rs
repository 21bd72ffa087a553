use log::Level;

pub const PROFILE_KEY: &str = "ketoSlimForm";
pub const THEME_KEY: &str = "theme";
pub const TIMER_END_KEY: &str = "ketoslim_timer_end_v1";

/// Length of the sales page discount window.
pub const COUNTDOWN_MS: i64 = 10 * 60 * 1000;
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Fraction of the pricing section that must be on screen before the sticky
/// call-to-action hides.
pub const STICKY_HIDE_THRESHOLD: f64 = 0.35;

pub const BODY_FAT_RANGE: (u32, u32) = (0, 100);
pub const BMI_RANGE: (u32, u32) = (0, 40);
pub const MAX_WATER_CUPS: u32 = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
