//! Bounded-width query window
//!
//! Keeps arbitrarily long queries readable in a fixed-width report: the
//! trimmed query is shown verbatim when it fits, otherwise a 70-character
//! slice is chosen so the caret stays visible, with ellipsis markers on the
//! truncated sides.

use super::rules::{fits_window, CARET, CARET_LEAD, LEFT_ELLIPSIS, RIGHT_ELLIPSIS, WINDOW_WIDTH};
use super::utils::{char_slice, leading_whitespace, pad};
use crate::config::Anchor;
use crate::diag::Position;

/// The visible slice of a query and where the caret falls inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Query text shown, without ellipsis markers
    pub text: String,
    /// Caret column relative to the start of `text`
    pub caret_column: usize,
    pub left_truncated: bool,
    pub right_truncated: bool,
}

impl Window {
    /// Compute the window for `position` taken against the trimmed query.
    ///
    /// Positions past the end of the query are not clamped; the caret is
    /// drawn past the visible text.
    pub fn compute(query: &str, position: Position) -> Self {
        let trimmed = query.trim();
        let qlen = trimmed.chars().count();
        let position = position.resolve(qlen);

        let window = if fits_window(qlen) {
            Self {
                text: trimmed.to_string(),
                caret_column: position,
                left_truncated: false,
                right_truncated: false,
            }
        } else if position <= CARET_LEAD {
            Self {
                text: char_slice(trimmed, 0, WINDOW_WIDTH).to_string(),
                caret_column: position,
                left_truncated: false,
                right_truncated: true,
            }
        } else {
            let trim = position - CARET_LEAD;
            let rest = qlen.saturating_sub(trim);
            Self {
                text: char_slice(trimmed, trim, rest.min(WINDOW_WIDTH)).to_string(),
                caret_column: position - trim,
                left_truncated: true,
                right_truncated: rest > WINDOW_WIDTH,
            }
        };

        tracing::trace!(
            qlen,
            position,
            caret = window.caret_column,
            left = window.left_truncated,
            right = window.right_truncated,
            "computed query window"
        );
        window
    }

    /// Compute the window, first re-anchoring `position` per `anchor`
    pub fn compute_anchored(query: &str, position: Position, anchor: Anchor) -> Self {
        let position = match (anchor, position) {
            (Anchor::Original, Position::At(offset)) => {
                Position::At(offset.saturating_sub(leading_whitespace(query)))
            }
            (_, position) => position,
        };
        Self::compute(query, position)
    }

    /// Column of the caret on the rendered caret line, including margin and prefix
    pub fn caret_offset(&self, margin: usize) -> usize {
        let prefix = if self.left_truncated { LEFT_ELLIPSIS.len() } else { 0 };
        self.caret_column + margin + prefix
    }

    /// Emit the context line and the caret line, both newline-terminated
    pub fn render(&self, margin: usize) -> String {
        let mut out = String::with_capacity(self.text.len() + margin + 16);
        if self.left_truncated {
            out.push_str(LEFT_ELLIPSIS);
        }
        out.push_str(&self.text);
        if self.right_truncated {
            out.push_str(RIGHT_ELLIPSIS);
        }
        out.push('\n');
        out.push_str(&pad(self.caret_offset(margin)));
        out.push_str(CARET);
        out.push('\n');
        out
    }
}

/// Render the two-line context block for `query` with the caret at `position`
pub fn render_window(query: &str, position: Position, margin: usize) -> String {
    Window::compute(query, position).render(margin)
}
