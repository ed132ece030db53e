use super::{scan_word, Primitive, RawMatch, RawValue, FIELD_NAME_EXTRA};

/// `(field_name <separator>)+`, greedily consuming as many `name:`
/// segments as possible (`address:zip:ABC1234` yields the path
/// `["address", "zip"]`, leaving `ABC1234` for the value matcher).
#[derive(Debug, Clone)]
pub struct MultiField {
    precedence: i32,
    separator: String,
}

impl MultiField {
    pub fn new(precedence: i32, separator: impl Into<String>) -> Self {
        Self {
            precedence,
            separator: separator.into(),
        }
    }
}

impl Default for MultiField {
    fn default() -> Self {
        Self::new(12, ":")
    }
}

impl Primitive for MultiField {
    fn name(&self) -> &'static str {
        "multi_field"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let mut pos = 0usize;
        let mut segments = Vec::new();

        loop {
            let (name_len, name) = match scan_word(&input[pos..], FIELD_NAME_EXTRA, false) {
                Some(v) => v,
                None => break,
            };
            let after_name = pos + name_len;
            match input[after_name..].strip_prefix(self.separator.as_str()) {
                Some(_) => {
                    segments.push(name);
                    pos = after_name + self.separator.len();
                }
                None => break,
            }
        }

        if segments.is_empty() {
            None
        } else {
            Some(RawMatch::new(pos, RawValue::FieldPath(segments)))
        }
    }
}
