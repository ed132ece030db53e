use super::{scan_integer, scan_quoted, Primitive, RawMatch, RawValue};

/// `quoted_string "~" integer`, for proximity queries like `"big data"~3`.
#[derive(Debug, Clone)]
pub struct StringProximity {
    precedence: i32,
}

impl StringProximity {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for StringProximity {
    fn default() -> Self {
        Self::new(11)
    }
}

impl Primitive for StringProximity {
    fn name(&self) -> &'static str {
        "string_proximity"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (quoted_len, body) = scan_quoted(input)?;
        let rest = input[quoted_len..].strip_prefix('~')?;
        let (int_len, distance) = scan_integer(rest)?;

        let total = quoted_len + 1 + int_len;
        Some(RawMatch::new(total, RawValue::Proximity(body, distance)))
    }
}
