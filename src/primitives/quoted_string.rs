use super::{scan_quoted, Primitive, RawMatch, RawValue};

/// `"…"` or `'…'`, with standard backslash escapes resolved.
#[derive(Debug, Clone)]
pub struct QuotedString {
    precedence: i32,
}

impl QuotedString {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for QuotedString {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Primitive for QuotedString {
    fn name(&self) -> &'static str {
        "quoted_string"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (len, body) = scan_quoted(input)?;
        Some(RawMatch::new(len, RawValue::Quoted(body)))
    }
}
