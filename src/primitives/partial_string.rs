use super::{scan_word, Primitive, RawMatch, RawValue, SIMPLE_WORD_EXTRA};

/// Same recognizer as `simple_word`, used as the default unquoted
/// value type (precedence 3 by default, ahead of `simple_word`'s 0).
#[derive(Debug, Clone)]
pub struct PartialString {
    precedence: i32,
}

impl PartialString {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for PartialString {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Primitive for PartialString {
    fn name(&self) -> &'static str {
        "partial_string"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (len, word) = scan_word(input, SIMPLE_WORD_EXTRA, true)?;
        Some(RawMatch::new(len, RawValue::Word(word)))
    }
}
