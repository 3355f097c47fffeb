//! Window layout rules
//!
//! - Window width: 70 characters of query text
//! - Caret lead: the caret sits at most 35 characters into a shifted window
//! - Truncation markers: `"... "` before and `" ..."` after the window

/// Maximum number of query characters shown in a window
pub const WINDOW_WIDTH: usize = 70;

/// Distance from the window start to the caret once the window has to shift
pub const CARET_LEAD: usize = 35;

/// Marker printed before a left-truncated window
pub const LEFT_ELLIPSIS: &str = "... ";

/// Marker printed after a right-truncated window
pub const RIGHT_ELLIPSIS: &str = " ...";

/// Caret drawn under the failing column
pub const CARET: &str = "^--";

/// Check if a trimmed query of `len` characters fits without truncation
pub fn fits_window(len: usize) -> bool {
    len <= WINDOW_WIDTH
}
