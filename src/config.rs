//! Diagnostic configuration
//!
//! Replaces a process-wide default margin with a value the caller owns and
//! passes to the constructors. Each error captures the configuration it was
//! built with, so changing a config later never affects existing errors.

use crate::diag::{ErrorKind, Position, QueryError};

/// Left margin applied to the caret line and the message line
pub const DEFAULT_PADDING: usize = 7;

/// How an error position relates to the query text it is rendered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Position is used as-is against the whitespace-trimmed query
    #[default]
    Trimmed,
    /// Position counts from the start of the untrimmed query; leading
    /// whitespace removed by trimming is subtracted before windowing
    Original,
}

/// Settings captured by every error at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticConfig {
    pub padding: usize,
    pub anchor: Anchor,
}

impl DiagnosticConfig {
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            anchor: Anchor::Trimmed,
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Build a syntax error carrying this configuration
    pub fn syntax(&self, position: Position, message: impl Into<String>) -> QueryError {
        QueryError::with_config(ErrorKind::Syntax, position, message, self)
    }

    /// Build an execute error carrying this configuration
    pub fn execute(&self, position: Position, message: impl Into<String>) -> QueryError {
        QueryError::with_config(ErrorKind::Execute, position, message, self)
    }
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self::new()
    }
}
