//! Query diagnostics
//!
//! A [`QueryError`] is raised where a failure is detected, usually before the
//! full query text is in hand, and bound to that text later at the boundary
//! that owns it. Rendering an unbound error gives a one-line message; a bound
//! error renders the query window, the caret, and the message line.

pub mod binder;
pub mod position;

pub use binder::{AttachQueryExt, QueryBinder};
pub use position::Position;

use crate::config::{Anchor, DiagnosticConfig};
use crate::error::{Error, Result};
use crate::render::{pad, Window};
use miette::Diagnostic;
use std::fmt;

/// Origin of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed query text, detected before execution
    Syntax,
    /// Failure while running a well-formed query
    Execute,
}

impl ErrorKind {
    /// Label word used in the message line
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Execute => "Execute",
        }
    }

    fn code(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "querydiag::syntax",
            ErrorKind::Execute => "querydiag::execute",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A syntax or execute failure, optionally bound to the query it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    kind: ErrorKind,
    message: String,
    position: Position,
    padding: usize,
    anchor: Anchor,
    query: Option<String>,
}

impl QueryError {
    /// Syntax error with the default configuration
    pub fn syntax(position: Position, message: impl Into<String>) -> Self {
        Self::with_config(ErrorKind::Syntax, position, message, &DiagnosticConfig::default())
    }

    /// Execute error with the default configuration
    pub fn execute(position: Position, message: impl Into<String>) -> Self {
        Self::with_config(ErrorKind::Execute, position, message, &DiagnosticConfig::default())
    }

    /// Build an error of `kind`, capturing padding and anchor from `config`
    pub fn with_config(
        kind: ErrorKind,
        position: Position,
        message: impl Into<String>,
        config: &DiagnosticConfig,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            padding: config.padding,
            anchor: config.anchor,
            query: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The bound query, exactly as it was passed in
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.query.is_some()
    }

    /// Attach the original, untrimmed query text.
    ///
    /// A query can be bound once; later binds fail and leave the first one in
    /// place. Binding an empty string is a no-op.
    pub fn bind(&mut self, query: impl Into<String>) -> Result<()> {
        if self.query.is_some() {
            return Err(Error::QueryAlreadyBound);
        }
        let query = query.into();
        if query.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            kind = %self.kind,
            position = %self.position,
            chars = query.chars().count(),
            "bound query to error"
        );
        self.query = Some(query);
        Ok(())
    }

    /// Override the margin used by subsequent renders
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// Owned form of [`QueryError::bind`]
    pub fn with_query(mut self, query: impl Into<String>) -> Result<Self> {
        self.bind(query)?;
        Ok(self)
    }

    /// Owned form of [`QueryError::set_padding`]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Render the diagnostic.
    ///
    /// Unbound: `"<Kind> Error: <message> at <position>"`. Bound: the query
    /// window and caret line, then the message line indented by the padding.
    pub fn render(&self) -> String {
        match &self.query {
            None => format!("{} Error: {} at {}", self.kind, self.message, self.position),
            Some(query) => {
                let window = Window::compute_anchored(query, self.position, self.anchor);
                let mut out = window.render(self.padding);
                out.push_str(&pad(self.padding));
                out.push_str(&format!("{} Error: {}", self.kind, self.message));
                out
            }
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for QueryError {}

impl Diagnostic for QueryError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }
}

/// Build a [`QueryError`] of kind `Syntax` from a position and a format string
#[macro_export]
macro_rules! syntax_error {
    ($position:expr, $($arg:tt)+) => {
        $crate::diag::QueryError::syntax($position, ::std::format!($($arg)+))
    };
}

/// Build a [`QueryError`] of kind `Execute` from a position and a format string
#[macro_export]
macro_rules! execute_error {
    ($position:expr, $($arg:tt)+) => {
        $crate::diag::QueryError::execute($position, ::std::format!($($arg)+))
    };
}
