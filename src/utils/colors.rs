/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Sleep-hours color for the nights table:
/// >= 10h green, < 8h red, otherwise yellow.
pub fn color_for_sleep_hours(hours: f64) -> &'static str {
    if hours >= 10.0 {
        GREEN
    } else if hours < 8.0 {
        RED
    } else {
        YELLOW
    }
}

/// Asleep minutes in cyan, awake ones grey.
pub fn color_for_status(awake: bool) -> &'static str {
    if awake { GREY } else { CYAN }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
