use super::{scan_word, Primitive, RawMatch, RawValue, SIMPLE_WORD_EXTRA};

/// `[A-Za-z0-9_.-]+`, with `\\` treated as an escape: `\\\\` -> `\\`,
/// `\x` -> `x`. Used as the generic "free word" fallback, e.g. the
/// optional non-enumerated value of a keyword term.
#[derive(Debug, Clone)]
pub struct SimpleWord {
    precedence: i32,
}

impl SimpleWord {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for SimpleWord {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Primitive for SimpleWord {
    fn name(&self) -> &'static str {
        "simple_word"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (len, word) = scan_word(input, SIMPLE_WORD_EXTRA, true)?;
        Some(RawMatch::new(len, RawValue::Word(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_word() {
        let m = SimpleWord::default().try_match("hello world").unwrap();
        assert_eq!(m.len, 5);
        assert_eq!(m.value, RawValue::Word("hello".into()));
    }

    #[test]
    fn unescapes_backslash_sequences() {
        let m = SimpleWord::default().try_match(r"a\\b\x").unwrap();
        assert_eq!(m.value, RawValue::Word("a\\bx".into()));
    }

    #[test]
    fn stops_at_unsupported_character() {
        assert!(SimpleWord::default().try_match(" leading").is_none());
    }
}
