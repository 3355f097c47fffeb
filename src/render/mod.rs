//! Query context rendering
//!
//! Turns a query and an error position into the two-line block shown above
//! a diagnostic message: the (possibly truncated) query text and a caret
//! line pointing at the failing column.

pub mod rules;
pub mod utils;
pub mod window;

pub use utils::pad;
pub use window::{render_window, Window};
