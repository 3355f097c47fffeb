//! Error positions

use crate::error::{Error, Result};
use std::fmt;

/// Where in the query a failure was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Character offset into the query text
    At(usize),
    /// End of the query, used when no specific column is known
    End,
}

impl Position {
    /// Raw value used by producers for "end of query"
    pub const END_SENTINEL: i64 = -1;

    /// Convert a raw integer position, rejecting negatives other than -1
    pub fn from_raw(raw: i64) -> Result<Self> {
        if raw == Self::END_SENTINEL {
            return Ok(Position::End);
        }
        usize::try_from(raw)
            .map(Position::At)
            .map_err(|_| Error::InvalidPosition { position: raw })
    }

    /// Column this position points at in a query of `len` characters
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Position::At(offset) => offset,
            Position::End => len,
        }
    }
}

impl From<usize> for Position {
    fn from(offset: usize) -> Self {
        Position::At(offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::At(offset) => write!(f, "{}", offset),
            Position::End => write!(f, "{}", Self::END_SENTINEL),
        }
    }
}
