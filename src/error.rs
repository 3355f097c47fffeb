//! Error types for querydiag

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for querydiag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by querydiag itself, as opposed to the diagnostics it renders
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("invalid error position {position}: expected -1 or a non-negative offset")]
    #[diagnostic(
        code(querydiag::invalid_position),
        help("use -1 when the failure is at the end of the query")
    )]
    InvalidPosition { position: i64 },

    #[error("query text is already bound to this error")]
    #[diagnostic(code(querydiag::query_already_bound))]
    QueryAlreadyBound,

    #[error("IO error: {0}")]
    #[diagnostic(code(querydiag::io_error))]
    IoError(#[from] std::io::Error),
}
