//! ANSI escape sequences used by the renderer
//!
//! Styles are written inline with the text so a single `write` carries both.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const REVERSE: &str = "\x1b[7m";

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_BRIGHT_WHITE: &str = "\x1b[97m";

/// Header bar background (256-color steel blue)
pub const BG_256_STEEL_BLUE: &str = "\x1b[48;5;32m";
