//! Late binding of query text
//!
//! Errors are usually raised deep in a parser or executor that only sees
//! tokens and offsets. The caller that owns the raw query binds it here.

use super::QueryError;
use crate::error::Result;

/// Errors that accept their query text and margin after construction
pub trait QueryBinder {
    fn bind_query(&mut self, query: &str) -> Result<()>;
    fn set_padding(&mut self, padding: usize);
}

impl QueryBinder for QueryError {
    fn bind_query(&mut self, query: &str) -> Result<()> {
        self.bind(query)
    }

    fn set_padding(&mut self, padding: usize) {
        QueryError::set_padding(self, padding);
    }
}

/// Attach query text to the error side of a result
pub trait AttachQueryExt<T> {
    /// Bind `query` to the error, if any. An error that is already bound
    /// keeps its first query.
    fn attach_query(self, query: &str) -> std::result::Result<T, QueryError>;
}

impl<T> AttachQueryExt<T> for std::result::Result<T, QueryError> {
    fn attach_query(self, query: &str) -> std::result::Result<T, QueryError> {
        self.map_err(|mut err| {
            if let Err(e) = err.bind(query) {
                tracing::debug!(error = %e, kind = %err.kind(), "keeping previously bound query");
            }
            err
        })
    }
}
