//! Character-bounded context windows around matches.
//!
//! Radii count characters, not bytes, so accented OCR text never splits
//! inside a code point. Windows clamp to the available text.

/// Slice of at most `chars` characters ending at byte offset `pos`.
pub fn before(text: &str, pos: usize, chars: usize) -> &str {
    if chars == 0 {
        return &text[pos..pos];
    }
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &text[start..pos]
}

/// Slice of at most `chars` characters starting at byte offset `pos`.
pub fn after(text: &str, pos: usize, chars: usize) -> &str {
    let end = text[pos..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len());
    &text[pos..end]
}

/// Last `chars` characters of `text`.
pub fn tail(text: &str, chars: usize) -> &str {
    before(text, text.len(), chars)
}

/// First `chars` characters of `text`.
pub fn head(text: &str, chars: usize) -> &str {
    after(text, 0, chars)
}

/// Text on both sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    pub before: &'a str,
    pub after: &'a str,
}

impl<'a> ContextWindow<'a> {
    /// Window of `radius` characters on each side of `start..end`.
    pub fn around(text: &'a str, start: usize, end: usize, radius: usize) -> Self {
        Self {
            before: before(text, start, radius),
            after: after(text, end, radius),
        }
    }

    /// Whole window including the match itself.
    pub fn spanning(text: &'a str, start: usize, end: usize, radius: usize) -> &'a str {
        let window = Self::around(text, start, end, radius);
        let from = start - window.before.len();
        let to = end + window.after.len();
        &text[from..to]
    }

    /// Owned copies with surrounding whitespace stripped.
    pub fn trimmed(&self) -> (String, String) {
        (self.before.trim().to_string(), self.after.trim().to_string())
    }
}
