//! querydiag - Caret diagnostics for query-language front ends
//!
//! Parsers and executors raise a [`QueryError`] with a message and a
//! character position. Once the caller holds the original query it binds the
//! text, and rendering shows a bounded window of the query with a caret under
//! the failing column.

pub mod cli;
pub mod config;
pub mod diag;
pub mod error;
pub mod render;

pub use config::{Anchor, DiagnosticConfig, DEFAULT_PADDING};
pub use diag::{AttachQueryExt, ErrorKind, Position, QueryBinder, QueryError};
pub use error::{Error, Result};
pub use render::{pad, render_window};
