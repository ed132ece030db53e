use super::{scan_word, Primitive, RawMatch, RawValue, FIELD_NAME_EXTRA};

/// `[A-Za-z0-9_-]+` — like `simple_word` but disallows `.` and never
/// unescapes backslashes.
#[derive(Debug, Clone)]
pub struct FieldName {
    precedence: i32,
}

impl FieldName {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Primitive for FieldName {
    fn name(&self) -> &'static str {
        "field_name"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (len, word) = scan_word(input, FIELD_NAME_EXTRA, false)?;
        Some(RawMatch::new(len, RawValue::Word(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dot() {
        let m = FieldName::default().try_match("a.b").unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.value, RawValue::Word("a".into()));
    }
}
