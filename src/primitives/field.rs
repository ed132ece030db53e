use super::{scan_word, Primitive, RawMatch, RawValue, FIELD_NAME_EXTRA};

/// `field_name <separator>`, default separator `:`.
#[derive(Debug, Clone)]
pub struct Field {
    precedence: i32,
    separator: String,
}

impl Field {
    pub fn new(precedence: i32, separator: impl Into<String>) -> Self {
        Self {
            precedence,
            separator: separator.into(),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(11, ":")
    }
}

impl Primitive for Field {
    fn name(&self) -> &'static str {
        "field"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (name_len, name) = scan_word(input, FIELD_NAME_EXTRA, false)?;
        let rest = input[name_len..].strip_prefix(self.separator.as_str())?;
        let total = name_len + self.separator.len();
        let _ = rest;
        Some(RawMatch::new(total, RawValue::FieldPath(vec![name])))
    }
}
