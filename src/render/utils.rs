//! Utility functions for the window renderer

/// Produce a run of `n` spaces
pub fn pad(n: usize) -> String {
    " ".repeat(n)
}

/// Slice `len` characters starting at character `start`, clipping at the end of `s`
pub(crate) fn char_slice(s: &str, start: usize, len: usize) -> &str {
    let mut indices = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let Some(from) = indices.nth(start) else {
        return "";
    };
    let to = if len == 0 {
        from
    } else {
        indices.nth(len - 1).unwrap_or(s.len())
    };
    &s[from..to]
}

/// Count leading whitespace characters that `str::trim` would remove
pub(crate) fn leading_whitespace(s: &str) -> usize {
    s.chars().take_while(|c| c.is_whitespace()).count()
}
