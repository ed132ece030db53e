//! Byte offset -> line/column conversion, used to decorate [`crate::error::QueryonError::Syntax`].

/// A position in source text, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert a byte offset into `text` into a line/column position.
    ///
    /// Lines are split on `\n`; column counts bytes since the last
    /// newline, not chars, which is adequate for the ASCII-heavy query
    /// syntax this crate parses.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let mut line = 0;
        let mut last_newline = 0;

        for (idx, b) in text.as_bytes()[..offset].iter().enumerate() {
            if *b == b'\n' {
                line += 1;
                last_newline = idx + 1;
            }
        }

        Position::new(line, offset - last_newline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_zero_is_line_zero_col_zero() {
        assert_eq!(Position::from_offset("author:smith", 0), Position::new(0, 0));
    }

    #[test]
    fn offset_mid_line() {
        assert_eq!(Position::from_offset("author:smith", 7), Position::new(0, 7));
    }

    #[test]
    fn offset_after_newline() {
        let text = "first\nsecond:term";
        assert_eq!(Position::from_offset(text, 10), Position::new(1, 4));
    }

    #[test]
    fn offset_past_end_clamps() {
        let text = "abc";
        assert_eq!(Position::from_offset(text, 100), Position::new(0, 3));
    }
}
